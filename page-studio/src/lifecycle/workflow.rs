//! Editor workflow state machine
//!
//! ```text
//! Idle ─create─▶ BrandSelection ─brand─▶ TemplateSelection ─level─▶ Editing
//! Idle ─clone──▶ CloneSourceSelection ─source─▶ BrandSelection(source) ─brand─▶ Editing
//! Idle ─edit/import────────────────────────────────────────────────▶ Editing
//! Editing ─save/cancel─▶ Idle
//! ```
//!
//! Transitions are synchronous and pure. Anything that touches storage or
//! identity lives in the orchestrator.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{Brand, BrandPage};

use crate::pages::{TemplateLevel, clone_page, generate};

/// Where the document being edited came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditOrigin {
    Template { level: TemplateLevel },
    Clone { source_brand_id: String },
    Existing { page_id: String },
    Import,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    CloneSourceSelection,
    /// `clone_source` is set when the flow started from a clone
    BrandSelection {
        clone_source: Option<Box<BrandPage>>,
    },
    TemplateSelection {
        brand: Brand,
    },
    Editing {
        document: Box<BrandPage>,
        origin: EditOrigin,
    },
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::CloneSourceSelection => "clone_source_selection",
            WorkflowState::BrandSelection { .. } => "brand_selection",
            WorkflowState::TemplateSelection { .. } => "template_selection",
            WorkflowState::Editing { .. } => "editing",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, WorkflowState::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, WorkflowState::Editing { .. })
    }
}

#[derive(Debug, Default)]
pub struct PageWorkflow {
    state: WorkflowState,
}

fn unexpected(state: &WorkflowState, action: &str) -> AppError {
    AppError::invalid_state(format!("Cannot {action} while {}", state.name()))
        .with_detail("state", state.name())
        .with_detail("action", action)
}

impl PageWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    fn require_idle(&self, action: &str) -> AppResult<()> {
        if self.state.is_idle() {
            Ok(())
        } else {
            Err(unexpected(&self.state, action))
        }
    }

    /// Idle → BrandSelection
    pub fn start_new(&mut self) -> AppResult<()> {
        self.require_idle("create a page")?;
        self.state = WorkflowState::BrandSelection { clone_source: None };
        Ok(())
    }

    /// Idle → CloneSourceSelection
    pub fn start_clone(&mut self) -> AppResult<()> {
        self.require_idle("clone a page")?;
        self.state = WorkflowState::CloneSourceSelection;
        Ok(())
    }

    /// CloneSourceSelection → BrandSelection(source)
    pub fn select_source(&mut self, source: BrandPage) -> AppResult<()> {
        if !matches!(self.state, WorkflowState::CloneSourceSelection) {
            return Err(unexpected(&self.state, "select a clone source"));
        }
        self.state = WorkflowState::BrandSelection {
            clone_source: Some(Box::new(source)),
        };
        Ok(())
    }

    /// BrandSelection → TemplateSelection, or straight to Editing when cloning.
    ///
    /// A failed clone leaves the workflow in BrandSelection with the source intact.
    pub fn choose_brand(&mut self, brand: Brand, fallback_name: &str) -> AppResult<()> {
        let WorkflowState::BrandSelection { clone_source } = &self.state else {
            return Err(unexpected(&self.state, "choose a brand"));
        };
        self.state = match clone_source {
            Some(source) => {
                let document = clone_page(Some(source.as_ref()), &brand, fallback_name)?;
                WorkflowState::Editing {
                    origin: EditOrigin::Clone {
                        source_brand_id: source.brand_id.clone(),
                    },
                    document: Box::new(document),
                }
            }
            None => WorkflowState::TemplateSelection { brand },
        };
        Ok(())
    }

    /// TemplateSelection → Editing
    pub fn choose_level(&mut self, level: TemplateLevel) -> AppResult<()> {
        let WorkflowState::TemplateSelection { brand } = &self.state else {
            return Err(unexpected(&self.state, "choose a template"));
        };
        let document = generate(brand, level);
        self.state = WorkflowState::Editing {
            document: Box::new(document),
            origin: EditOrigin::Template { level },
        };
        Ok(())
    }

    /// Idle → Editing with a document that already exists elsewhere
    pub fn open(&mut self, document: BrandPage, origin: EditOrigin) -> AppResult<()> {
        self.require_idle("open a page")?;
        self.state = WorkflowState::Editing {
            document: Box::new(document),
            origin,
        };
        Ok(())
    }

    pub fn document(&self) -> Option<&BrandPage> {
        match &self.state {
            WorkflowState::Editing { document, .. } => Some(document.as_ref()),
            _ => None,
        }
    }

    pub fn document_mut(&mut self) -> AppResult<&mut BrandPage> {
        match &mut self.state {
            WorkflowState::Editing { document, .. } => Ok(document.as_mut()),
            other => Err(unexpected(other, "edit")),
        }
    }

    pub fn origin(&self) -> Option<&EditOrigin> {
        match &self.state {
            WorkflowState::Editing { origin, .. } => Some(origin),
            _ => None,
        }
    }

    /// Editing → Idle after a successful save
    pub fn finish_save(&mut self) -> AppResult<()> {
        if !self.state.is_editing() {
            return Err(unexpected(&self.state, "save"));
        }
        self.state = WorkflowState::Idle;
        Ok(())
    }

    /// Any state → Idle, discarding edits and any pending clone source
    pub fn cancel(&mut self) {
        self.state = WorkflowState::Idle;
    }
}
