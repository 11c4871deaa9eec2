//! NoticeEngine — runs the full evaluation pipeline for one item:
//! applicability checks, age computation, classification, label
//! rendering, and structured-data projection.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use agemark_core::config::NoticeConfig;
use agemark_core::markup;
use agemark_core::models::{
    AgeFacts, AnnotationRecord, ContentItem, NoticeOverride, NoticeState,
};

use crate::classify::{self, PolicyInput};
use crate::render::{self, TokenMap};
use crate::{age, project};

/// Optional caller-supplied interception points, applied in pipeline
/// order. Each receives the value it may replace plus the item.
///
/// Groups the callbacks so `evaluate` doesn't take a parameter per hook.
#[derive(Default)]
pub struct EvalHooks<'a> {
    /// May veto evaluation before any age math runs.
    pub applicability: Option<&'a dyn Fn(bool, &ContentItem) -> bool>,
    /// Adjusts the classified state; runs inside the classifier, last.
    pub state: Option<&'a dyn Fn(NoticeState, &PolicyInput<'_>) -> NoticeState>,
    /// Extends or rewrites the token set before rendering.
    pub tokens: Option<&'a dyn Fn(TokenMap, &ContentItem) -> TokenMap>,
    /// Rewrites the rendered label; output is still sanitized afterwards.
    pub label: Option<&'a dyn Fn(String, NoticeState, &ContentItem) -> String>,
}

/// One evaluated notice: a non-`None` state with its derived artifacts.
#[derive(Debug, Clone)]
pub struct Notice {
    pub state: NoticeState,
    pub facts: AgeFacts,
    /// Rendered, sanitized label ready for presentation.
    pub label: String,
    /// Structured record, when structured data output is enabled.
    pub annotation: Option<AnnotationRecord>,
}

/// The outdated-content evaluation engine.
///
/// Holds no mutable state; every evaluation is pure given its inputs.
/// The caller reads "now" once per evaluation and owns the
/// request-scoped `seen` set that prevents double annotation.
pub struct NoticeEngine {
    config: NoticeConfig,
}

impl NoticeEngine {
    pub fn new(config: NoticeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NoticeConfig {
        &self.config
    }

    /// Evaluate one item. Returns `None` whenever no notice applies:
    /// engine disabled, item already processed this request, not
    /// published, type not enabled, vetoed by the applicability hook,
    /// basis timestamp absent, or classified state `None`.
    pub fn evaluate(
        &self,
        item: &ContentItem,
        item_override: &NoticeOverride,
        now: DateTime<Utc>,
        seen: &mut HashSet<String>,
        hooks: &EvalHooks<'_>,
    ) -> Option<Notice> {
        if !self.config.enabled {
            return None;
        }
        if seen.contains(&item.id) {
            debug!(item_id = %item.id, "item already annotated this request, skipping");
            return None;
        }
        if !item.status.is_published() {
            return None;
        }
        if !self.config.allowed_types.iter().any(|t| t == &item.item_type) {
            return None;
        }
        let applicable = hooks.applicability.map_or(true, |f| f(true, item));
        if !applicable {
            debug!(item_id = %item.id, "applicability hook vetoed evaluation");
            return None;
        }

        let Some(reference) = age::reference_time(item, self.config.age_basis) else {
            debug!(
                item_id = %item.id,
                basis = ?self.config.age_basis,
                "basis timestamp absent, item not applicable"
            );
            return None;
        };
        let facts = age::compute_age(reference, now);

        let state = classify::classify(&facts, &self.config, item_override, item, hooks.state);
        if state.is_none() {
            return None;
        }

        let mut tokens = render::standard_tokens(&facts, item);
        if let Some(f) = hooks.tokens {
            tokens = f(tokens, item);
        }
        let template = render::select_template(&self.config, item_override, state);
        let mut label = render::render(template, &tokens);
        if let Some(f) = hooks.label {
            label = f(label, state, item);
        }
        // Sanitize after all hooks: override labels and hook output are
        // untrusted.
        let label = markup::sanitize(&label);

        let annotation = project::project(item, &self.config, state, &facts);

        seen.insert(item.id.clone());
        Some(Notice {
            state,
            facts,
            label,
            annotation,
        })
    }
}
