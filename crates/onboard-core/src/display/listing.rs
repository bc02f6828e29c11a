//! Markdown display for steps and step listings.

use std::fmt;

use super::{datetime::StepTime, report::DoneLink};
use crate::{
    migrator::StepListing,
    models::{Step, StepProgress, StepStatus},
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} done ({}%)",
            self.completed,
            self.total,
            self.percent()
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Stage: {}", self.id)?;
        if !self.updated_at.is_empty() {
            writeln!(f, "- Updated: {}", StepTime(&self.updated_at))?;
        }
        if self.donelink.as_deref().is_some_and(|link| !link.is_empty()) {
            writeln!(f, "-{}", DoneLink(self))?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for StepListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Onboarding steps for {}/{}",
            self.document.collection, self.document.id
        )?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No onboarding steps found.")?;
            return Ok(());
        }

        writeln!(f, "Progress: {}", self.progress)?;
        for step in &self.steps {
            writeln!(f)?;
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
