pub mod contact;
pub mod content;
pub mod mailer;
pub mod migration;
pub mod seed;

pub use contact::{ContactForm, ContactIntake, Submission, SubmissionOutcome, ValidationError};
pub use content::{ContentService, RefreshHint};
pub use mailer::{Mailer, ResendMailer};
pub use migration::{MigrationReport, MigrationStatus, Migrator};
