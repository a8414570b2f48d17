pub use super::student::{Model as Student, Summary as StudentSummary};
