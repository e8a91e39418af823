//! # Composition Store
//!
//! The editing surface as a reducer: `transition(state, action) -> state`.
//!
//! ## Action Semantics
//!
//! Every action is total. Unknown section ids and out-of-range indices are
//! no-ops that return the state unchanged; nothing here fails.
//!
//! ### Selection
//! - `Add` selects the new last section
//! - `Remove` clears the selection if it pointed at the removed section and
//!   shifts it down by one if it pointed below
//! - `Reorder` keeps the selection on the same section (see [`crate::reorder`])
//! - `ApplyTemplate` always clears it
//!
//! ### Editing
//! - `SetProps` / `SetClasses` only touch the selected section
//! - `ApplyAiPatch` addresses its section by instance id and is dropped if
//!   that section is gone

use crate::ai_patch::merge;
use crate::composition::{position_of, PageSection, Selection};
use crate::id_generator::IDGenerator;
use crate::reorder::reorder;
use crate::template::expand;
use crate::undo_stack::UndoStack;
use pagecraft_sections::{
    Props, RenderOutcome, RendererTable, SectionDefinition, SectionRegistry, TemplateSectionRef,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Immutable snapshot of one page's composition and selection
///
/// The selection is always `None` or a valid index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    sections: Vec<PageSection>,
    selection: Selection,
}

impl EditorState {
    pub fn new(sections: Vec<PageSection>) -> Self {
        Self {
            sections,
            selection: None,
        }
    }

    /// Same sections with a selection; out-of-range indices clear it
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection.filter(|&i| i < self.sections.len());
        self
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<PageSection> {
        self.sections
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_section(&self) -> Option<&PageSection> {
        self.selection.and_then(|i| self.sections.get(i))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        position_of(&self.sections, id)
    }

    pub fn get(&self, id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Editing operations on a composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Action {
    /// Append a new section from the catalog and select it
    Add { section_id: String },

    /// Delete the section at index
    Remove { index: usize },

    /// Select a section, or clear the selection with `None`
    Select { index: Option<usize> },

    /// Replace the props of the selected section
    SetProps { index: usize, props: Props },

    /// Replace the custom classes of the selected section
    SetClasses { index: usize, classes: String },

    /// Move a section from one position to another
    Reorder { from: usize, to: usize },

    /// Drag end: move `active_id` to where `over_id` is
    ReorderById { active_id: String, over_id: String },

    /// Replace the whole composition from template refs
    ApplyTemplate { refs: Vec<TemplateSectionRef> },

    /// Merge accepted keys of an AI proposal into one section
    ApplyAiPatch {
        target_id: String,
        proposed: Props,
        accepted_keys: Vec<String>,
    },
}

impl Action {
    /// Short human-readable label, used for undo descriptions
    pub fn describe(&self) -> &'static str {
        match self {
            Action::Add { .. } => "Add section",
            Action::Remove { .. } => "Remove section",
            Action::Select { .. } => "Select section",
            Action::SetProps { .. } => "Edit section",
            Action::SetClasses { .. } => "Edit classes",
            Action::Reorder { .. } | Action::ReorderById { .. } => "Move section",
            Action::ApplyTemplate { .. } => "Apply template",
            Action::ApplyAiPatch { .. } => "AI rewrite",
        }
    }
}

/// Applies actions to snapshots
///
/// Holds the registry for lookups and the id generator for new sections.
#[derive(Debug)]
pub struct Reducer {
    registry: Arc<SectionRegistry>,
    ids: IDGenerator,
}

impl Reducer {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self::with_ids(registry, IDGenerator::default())
    }

    pub fn with_ids(registry: Arc<SectionRegistry>, ids: IDGenerator) -> Self {
        Self { registry, ids }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Apply an action; no-ops return a copy of `state`
    pub fn transition(&mut self, state: &EditorState, action: Action) -> EditorState {
        self.apply(state, action).unwrap_or_else(|| state.clone())
    }

    /// Apply an action, `None` when it is a no-op
    pub fn apply(&mut self, state: &EditorState, action: Action) -> Option<EditorState> {
        match action {
            Action::Add { section_id } => self.apply_add(state, &section_id),
            Action::Remove { index } => Self::apply_remove(state, index),
            Action::Select { index } => Self::apply_select(state, index),
            Action::SetProps { index, props } => {
                Self::edit_selected(state, index, |section| section.props = props)
            }
            Action::SetClasses { index, classes } => {
                Self::edit_selected(state, index, |section| section.custom_classes = Some(classes))
            }
            Action::Reorder { from, to } => Self::apply_reorder(state, from, to),
            Action::ReorderById { active_id, over_id } => {
                let from = state.position_of(&active_id)?;
                let to = state.position_of(&over_id)?;
                Self::apply_reorder(state, from, to)
            }
            Action::ApplyTemplate { refs } => Some(EditorState {
                sections: expand(&self.registry, &refs, &mut self.ids),
                selection: None,
            }),
            Action::ApplyAiPatch {
                target_id,
                proposed,
                accepted_keys,
            } => Self::apply_ai_patch(state, &target_id, &proposed, &accepted_keys),
        }
    }

    fn apply_add(&mut self, state: &EditorState, section_id: &str) -> Option<EditorState> {
        let Some(def) = self.registry.get_by_id(section_id) else {
            tracing::debug!(section_id, "add ignored: unknown section");
            return None;
        };
        let props = def.default_props.clone();

        let id = self.fresh_id(&state.sections);
        let mut sections = state.sections.clone();
        sections.push(PageSection::new(id, section_id, props));
        let selection = Some(sections.len() - 1);

        Some(EditorState { sections, selection })
    }

    fn apply_remove(state: &EditorState, index: usize) -> Option<EditorState> {
        if index >= state.sections.len() {
            return None;
        }

        let mut sections = state.sections.clone();
        sections.remove(index);

        let selection = match state.selection {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };

        Some(EditorState { sections, selection })
    }

    fn apply_select(state: &EditorState, index: Option<usize>) -> Option<EditorState> {
        if index.is_some_and(|i| i >= state.sections.len()) {
            return None;
        }

        Some(EditorState {
            sections: state.sections.clone(),
            selection: index,
        })
    }

    fn edit_selected(
        state: &EditorState,
        index: usize,
        edit: impl FnOnce(&mut PageSection),
    ) -> Option<EditorState> {
        if state.selection != Some(index) || index >= state.sections.len() {
            return None;
        }

        let mut sections = state.sections.clone();
        edit(&mut sections[index]);

        Some(EditorState {
            sections,
            selection: state.selection,
        })
    }

    fn apply_reorder(state: &EditorState, from: usize, to: usize) -> Option<EditorState> {
        let (sections, selection) = reorder(&state.sections, from, to, state.selection)?;
        Some(EditorState { sections, selection })
    }

    fn apply_ai_patch(
        state: &EditorState,
        target_id: &str,
        proposed: &Props,
        accepted_keys: &[String],
    ) -> Option<EditorState> {
        let Some(index) = state.position_of(target_id) else {
            tracing::warn!(target_id, "AI patch dropped: section no longer exists");
            return None;
        };

        let mut sections = state.sections.clone();
        let section = &mut sections[index];
        section.props = merge(&section.props, proposed, accepted_keys);

        Some(EditorState {
            sections,
            selection: state.selection,
        })
    }

    fn fresh_id(&mut self, taken: &[PageSection]) -> String {
        loop {
            let id = self.ids.new_id();
            if position_of(taken, &id).is_none() {
                return id;
            }
        }
    }
}

/// Outcome of dispatching an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Unchanged,
}

/// Current snapshot plus undo history for one page
#[derive(Debug)]
pub struct CompositionStore {
    reducer: Reducer,
    state: EditorState,
    history: UndoStack,
}

impl CompositionStore {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self::with_state(registry, EditorState::default())
    }

    pub fn with_state(registry: Arc<SectionRegistry>, state: EditorState) -> Self {
        Self {
            reducer: Reducer::new(registry),
            state,
            history: UndoStack::new(),
        }
    }

    pub fn with_history_depth(mut self, max_levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(max_levels);
        self
    }

    pub fn with_id_generator(mut self, ids: IDGenerator) -> Self {
        self.reducer.ids = ids;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        self.reducer.registry()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut UndoStack {
        &mut self.history
    }

    /// Apply an action to the current snapshot
    ///
    /// Changes to the sections are recorded for undo; selection-only
    /// changes are not.
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        let description = action.describe();

        match self.reducer.apply(&self.state, action) {
            Some(next) if next != self.state => {
                let previous = std::mem::replace(&mut self.state, next);
                if previous.sections != self.state.sections {
                    self.history
                        .record(previous, self.state.clone(), Some(description));
                }
                tracing::debug!(action = description, sections = self.state.len(), "applied");
                Dispatch::Applied
            }
            _ => Dispatch::Unchanged,
        }
    }

    /// Replace the composition wholesale (e.g. after loading a page)
    pub fn reset(&mut self, state: EditorState) {
        self.state = state;
        self.history.clear();
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Definition of the selected section, if it is still in the catalog
    pub fn selected_definition(&self) -> Option<&SectionDefinition> {
        let section = self.state.selected_section()?;
        self.registry().get_by_id(&section.section_id)
    }

    /// Hand every section to the renderer table, top to bottom
    pub fn render<O>(&self, table: &RendererTable<O>) -> Vec<RenderOutcome<O>> {
        self.state
            .sections
            .iter()
            .map(|s| {
                table.render_section(
                    self.registry(),
                    &s.section_id,
                    &s.props,
                    s.custom_classes.as_deref(),
                )
            })
            .collect()
    }
}
