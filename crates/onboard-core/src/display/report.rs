//! Migration summary output.

use std::fmt;

use crate::{migrator::MigrationOutcome, models::Step};

/// The ` [Link: ...]` annotation for a step's donelink, empty without one.
pub struct DoneLink<'a>(pub &'a Step);

impl fmt::Display for DoneLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.donelink.as_deref() {
            Some(link) if !link.is_empty() => {
                let kind = if self.0.clickable { "Clickable" } else { "Tag" };
                write!(f, " [Link: {link} ({kind})]")
            }
            _ => Ok(()),
        }
    }
}

/// One summary line for an inserted step.
pub struct StepLine<'a>(pub &'a Step);

impl fmt::Display for StepLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.0;
        write!(
            f,
            "- {}: {} (Status: {}){}",
            step.name,
            step.description,
            step.status.as_str(),
            DoneLink(step)
        )
    }
}

/// Summary printed after a migration: a confirmation line followed by one
/// line per inserted step.
///
/// # Examples
///
/// ```rust
/// use onboard_core::{
///     display::MigrationReport,
///     migrator::MigrationOutcome,
///     models::{Step, StepStatus},
///     params::DocumentRef,
/// };
///
/// let outcome = MigrationOutcome {
///     document: DocumentRef::new("companies", "acme"),
///     discriminant: "payment".to_string(),
///     inserted: vec![Step {
///         id: "payment".to_string(),
///         name: "Purchase Subscription".to_string(),
///         description: "Pick a plan".to_string(),
///         status: StepStatus::Done,
///         updated_at: "2025-03-04T13:14:50Z".to_string(),
///         donelink: Some("View Invoice".to_string()),
///         clickable: true,
///     }],
///     removed: 1,
///     kept: 0,
///     version: Some(2),
/// };
///
/// let output = MigrationReport(&outcome).to_string();
/// assert!(output.starts_with("Updated onboarding steps successfully\n"));
/// assert!(output.contains(
///     "- Purchase Subscription: Pick a plan (Status: done) [Link: View Invoice (Clickable)]"
/// ));
/// ```
pub struct MigrationReport<'a>(pub &'a MigrationOutcome);

impl fmt::Display for MigrationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.written() {
            writeln!(f, "Updated onboarding steps successfully")?;
        } else {
            writeln!(f, "Dry run: onboarding steps were not written")?;
        }
        writeln!(f)?;
        writeln!(f, "New setup and onboarding steps:")?;
        for step in &self.0.inserted {
            writeln!(f)?;
            writeln!(f, "{}", StepLine(step))?;
        }
        Ok(())
    }
}
