pub mod submission;

pub use submission::SubmissionHandler;
