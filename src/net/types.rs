//! JSON DTOs for the Drawing Mirror REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's response models exactly, so these types
//! derive serde without renames. Optional backend columns are `Option`s;
//! counters the backend defaults to zero use `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub dataset_path: String,
    pub created_at: String,
    #[serde(default)]
    pub drawing_count: i64,
}

// =============================================================================
// DRAWINGS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: i64,
    pub user_id: i64,
    pub filename: String,
    pub filepath: String,
    pub drawn_date: Option<String>,
    pub title: Option<String>,
    pub file_ext: Option<String>,
    pub thumbnail_url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub analyzed_at: Option<String>,
}

/// A drawing plus its stored analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingDetail {
    #[serde(flatten)]
    pub drawing: Drawing,
    pub analysis_text: Option<String>,
    /// Raw JSON string as stored by the analyzer.
    pub analysis_json: Option<String>,
}

// =============================================================================
// ARCHIVE ANALYSIS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveStatus {
    pub analysis_id: Option<i64>,
    /// `pending`, `running`, `complete`, `failed` or `not_started`.
    pub status: String,
    /// `batch_analysis`, `lens_discovery`, `annotating` or `done`.
    pub phase: Option<String>,
    #[serde(default)]
    pub total_drawings: i64,
    #[serde(default)]
    pub analyzed_count: i64,
    #[serde(default)]
    pub has_lenses: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ArchiveStatus {
    /// Whether the pipeline has stopped, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_str(), "complete" | "failed")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeTrigger {
    pub analysis_id: i64,
    pub status: String,
}

// =============================================================================
// LENSES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lens {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub sort_order: i64,
    pub created_at: String,
    /// Drawings with any relevance score.
    #[serde(default)]
    pub drawing_count: i64,
    /// Drawings above the relevance threshold.
    #[serde(default)]
    pub relevant_count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensDrawing {
    #[serde(flatten)]
    pub drawing: Drawing,
    pub relevance_score: f64,
    /// `None` until the annotation has been generated.
    pub annotation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensDrawings {
    pub lens: Lens,
    pub drawings: Vec<LensDrawing>,
    pub annotations_ready: bool,
    pub annotation_total: i64,
    pub annotation_done: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationStatus {
    pub lens_id: i64,
    pub total: i64,
    pub ready: i64,
    /// `pending`, `generating` or `complete`.
    pub status: String,
}

// =============================================================================
// REACTIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Agree,
    Disagree,
    Annotate,
}

/// What a reaction responds to: a drawing's own analysis or a lens annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionTarget {
    DrawingAnalysis,
    LensAnnotation,
}

/// Body of `POST /reactions`. One reaction is kept per
/// (user, drawing, target type, target id); posting again replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReaction {
    pub user_id: i64,
    pub drawing_id: i64,
    pub target_type: ReactionTarget,
    /// Lens id as a string when `target_type` is `lens_annotation`.
    pub target_id: Option<String>,
    pub reaction_type: ReactionKind,
    #[serde(default)]
    pub annotation_text: Option<String>,
}

impl NewReaction {
    /// Reaction to a drawing's own analysis.
    #[must_use]
    pub fn on_analysis(user_id: i64, drawing_id: i64, kind: ReactionKind) -> Self {
        Self {
            user_id,
            drawing_id,
            target_type: ReactionTarget::DrawingAnalysis,
            target_id: None,
            reaction_type: kind,
            annotation_text: None,
        }
    }

    /// Reaction to a lens annotation for a drawing.
    #[must_use]
    pub fn on_lens(user_id: i64, drawing_id: i64, lens_id: i64, kind: ReactionKind) -> Self {
        Self {
            target_type: ReactionTarget::LensAnnotation,
            target_id: Some(lens_id.to_string()),
            ..Self::on_analysis(user_id, drawing_id, kind)
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.annotation_text = Some(text.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub user_id: i64,
    pub drawing_id: i64,
    pub target_type: ReactionTarget,
    pub target_id: Option<String>,
    pub reaction_type: ReactionKind,
    pub annotation_text: Option<String>,
    pub created_at: String,
}

// =============================================================================
// EMBEDDINGS
// =============================================================================

/// Progress of image-embedding computation for one user.
///
/// `POST /embeddings/generate` answers with the same shape, sometimes with a
/// `message` instead of counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingStatus {
    /// `idle`, `running`, `started`, `complete` or `error`.
    pub status: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub computed: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// One drawing's position in the 2-D embedding projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    pub drawing_id: i64,
    pub x: f64,
    pub y: f64,
    pub filename: String,
    pub title: Option<String>,
    pub drawn_date: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingMap {
    pub points: Vec<EmbeddingPoint>,
}
