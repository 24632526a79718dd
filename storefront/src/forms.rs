//! Contact and newsletter forms.
//!
//! The page captures what the visitor typed into a draft and hands it to a
//! [`FormSink`]. There is no endpoint behind the site; [`LogSink`] records
//! that a submission happened and drops it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterDraft {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Submission {
    Contact(ContactDraft),
    Newsletter(NewsletterDraft),
}

impl Submission {
    pub fn form(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "contact",
            Submission::Newsletter(_) => "newsletter",
        }
    }

    /// Names of the fields that hold something other than whitespace.
    ///
    /// Logged instead of the values so visitor details stay out of the console.
    pub fn filled_fields(&self) -> Vec<&'static str> {
        let fields: Vec<(&'static str, &str)> = match self {
            Submission::Contact(draft) => vec![
                ("first_name", draft.first_name.as_str()),
                ("last_name", draft.last_name.as_str()),
                ("email", draft.email.as_str()),
                ("company", draft.company.as_str()),
                ("message", draft.message.as_str()),
            ],
            Submission::Newsletter(draft) => vec![("email", draft.email.as_str())],
        };
        fields
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Receiver for form submissions.
pub trait FormSink {
    fn submit(&self, submission: Submission) -> Result<()>;
}

/// Sink that only logs. Used while the site has no form backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl FormSink for LogSink {
    fn submit(&self, submission: Submission) -> Result<()> {
        info!(
            form = submission.form(),
            fields = ?submission.filled_fields(),
            "form submitted; no endpoint configured, discarding"
        );
        Ok(())
    }
}
