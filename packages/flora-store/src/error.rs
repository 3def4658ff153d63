pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Store transport failure: {message}")]
	Transport { message: String },
	#[error("Store permission denied: {message}")]
	PermissionDenied { message: String },
}
