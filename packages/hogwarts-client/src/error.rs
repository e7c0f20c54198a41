pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error("Record lookup task did not complete: {message}")]
	Join { message: String },
	#[error("{message}")]
	InvalidConfig { message: String },
}
impl From<tokio::task::JoinError> for Error {
	fn from(err: tokio::task::JoinError) -> Self {
		Self::Join { message: err.to_string() }
	}
}
