// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Form actions shared by the namespace routes.
//!
//! Each route holds an [`NspaceActions`] value rather than inheriting the
//! behaviour. Actions report their own feedback; a failed save or delete
//! never aborts the navigation, it leaves the user on the form with an
//! error notice.

use std::fmt;
use std::sync::Arc;

use console_nspace_core::{Datacenter, Nspace};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::collaborators::NspaceWriter;

/// Which mutation an action performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
	Create,
	Update,
	Delete,
}

impl fmt::Display for ActionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ActionKind::Create => write!(f, "create"),
			ActionKind::Update => write!(f, "update"),
			ActionKind::Delete => write!(f, "delete"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
	Success,
	Error,
}

/// Notification shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
	pub action: ActionKind,
	pub kind: FeedbackKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Where to go after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
	/// Back to the namespace list.
	Index,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
	pub feedback: Option<Feedback>,
	pub redirect: Option<Redirect>,
}

impl ActionOutcome {
	fn success(action: ActionKind) -> Self {
		Self {
			feedback: Some(Feedback {
				action,
				kind: FeedbackKind::Success,
				message: None,
			}),
			redirect: Some(Redirect::Index),
		}
	}

	fn error(action: ActionKind, message: String) -> Self {
		Self {
			feedback: Some(Feedback {
				action,
				kind: FeedbackKind::Error,
				message: Some(message),
			}),
			redirect: None,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(
			self.feedback,
			Some(Feedback {
				kind: FeedbackKind::Success,
				..
			})
		)
	}
}

/// Save, delete and cancel handlers for namespace forms.
#[derive(Clone)]
pub struct NspaceActions {
	writer: Arc<dyn NspaceWriter>,
}

impl NspaceActions {
	pub fn new(writer: Arc<dyn NspaceWriter>) -> Self {
		Self { writer }
	}

	/// Creates or updates `item`.
	#[instrument(skip(self, dc, item), fields(dc = %dc, nspace = %item.name))]
	pub async fn save(&self, dc: &Datacenter, item: &Nspace, create: bool) -> ActionOutcome {
		let action = if create {
			ActionKind::Create
		} else {
			ActionKind::Update
		};
		match self.writer.persist(dc, item, create).await {
			Ok(_) => ActionOutcome::success(action),
			Err(e) => {
				warn!(error = %e, %action, "namespace save failed");
				ActionOutcome::error(action, e.to_string())
			}
		}
	}

	/// Deletes `item`.
	#[instrument(skip(self, dc, item), fields(dc = %dc, nspace = %item.name))]
	pub async fn delete(&self, dc: &Datacenter, item: &Nspace) -> ActionOutcome {
		match self.writer.remove(dc, item).await {
			Ok(()) => ActionOutcome::success(ActionKind::Delete),
			Err(e) => {
				warn!(error = %e, "namespace delete failed");
				ActionOutcome::error(ActionKind::Delete, e.to_string())
			}
		}
	}

	/// Leaves the form without saving.
	pub fn cancel(&self) -> ActionOutcome {
		ActionOutcome {
			feedback: None,
			redirect: Some(Redirect::Index),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{nspace, CallLog, FakeWriter};
	use console_nspace_core::ServiceError;

	fn dc1() -> Datacenter {
		Datacenter::new("dc1").unwrap()
	}

	#[tokio::test]
	async fn save_new_namespace_creates() {
		let log = CallLog::default();
		let actions = NspaceActions::new(Arc::new(FakeWriter::new(log.clone())));

		let outcome = actions.save(&dc1(), &nspace("eng"), true).await;

		assert!(outcome.is_success());
		assert_eq!(outcome.feedback.unwrap().action, ActionKind::Create);
		assert_eq!(outcome.redirect, Some(Redirect::Index));
		assert_eq!(log.entries(), vec!["persist:eng:true"]);
	}

	#[tokio::test]
	async fn save_existing_namespace_updates() {
		let log = CallLog::default();
		let actions = NspaceActions::new(Arc::new(FakeWriter::new(log.clone())));

		let outcome = actions.save(&dc1(), &nspace("eng"), false).await;

		assert_eq!(outcome.feedback.unwrap().action, ActionKind::Update);
		assert_eq!(log.entries(), vec!["persist:eng:false"]);
	}

	#[tokio::test]
	async fn failed_save_stays_on_form_with_error() {
		let log = CallLog::default();
		let writer = FakeWriter::failing(
			ServiceError::Status {
				status: 403,
				message: "Permission denied".to_string(),
			},
			log.clone(),
		);
		let actions = NspaceActions::new(Arc::new(writer));

		let outcome = actions.save(&dc1(), &nspace("eng"), false).await;

		assert!(!outcome.is_success());
		assert_eq!(outcome.redirect, None);
		let feedback = outcome.feedback.unwrap();
		assert_eq!(feedback.kind, FeedbackKind::Error);
		assert_eq!(
			feedback.message.as_deref(),
			Some("service returned 403: Permission denied")
		);
	}

	#[tokio::test]
	async fn delete_removes_and_redirects() {
		let log = CallLog::default();
		let actions = NspaceActions::new(Arc::new(FakeWriter::new(log.clone())));

		let outcome = actions.delete(&dc1(), &nspace("eng")).await;

		assert!(outcome.is_success());
		assert_eq!(outcome.feedback.unwrap().action, ActionKind::Delete);
		assert_eq!(log.entries(), vec!["remove:eng"]);
	}

	#[test]
	fn cancel_makes_no_calls() {
		let log = CallLog::default();
		let actions = NspaceActions::new(Arc::new(FakeWriter::new(log.clone())));

		let outcome = actions.cancel();

		assert_eq!(outcome.feedback, None);
		assert_eq!(outcome.redirect, Some(Redirect::Index));
		assert!(log.entries().is_empty());
	}
}
