// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Create / edit / delete workflow for one entity kind.
//!
//! The controller owns the form session: which record is being edited, the
//! images it had when editing began, and the operator's changes to the
//! preview. On submit it encodes newly picked images, decides which image
//! list to keep, assembles the record, and writes it. Every outcome is
//! reported through the view; the returned value is for control flow.

use serde_json::Value;
use showcase_core::view::Notice;
use showcase_core::{EncodedImage, EntityKind, Fields, Record, RecordId, RowAction};
use showcase_media::ImageSource;
use tracing::{debug, info};

use crate::error::FormError;
use crate::schema::{schema_for, EntitySchema, ImageArity, DRAFT};
use crate::values::{assemble, FormValues};
use crate::Admin;

const SAVE_FAILED: &str = "Error saving! Image may be too large. Try a smaller photo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// What the form is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    pub entity: EntityKind,
    pub mode: FormMode,
    pub editing_id: Option<RecordId>,
    /// Images the record held when editing began.
    pub original_images: Vec<EncodedImage>,
}

impl FormSession {
    fn create(entity: EntityKind) -> Self {
        Self {
            entity,
            mode: FormMode::Create,
            editing_id: None,
            original_images: Vec::new(),
        }
    }
}

/// Images currently previewed in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSet {
    images: Vec<EncodedImage>,
    cleared: bool,
}

impl PreviewSet {
    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }

    /// True once the operator has removed every previewed image.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn push(&mut self, image: EncodedImage) {
        self.images.push(image);
        self.cleared = false;
    }

    /// Removes one previewed image. Removing the last one counts as clearing.
    pub fn remove(&mut self, index: usize) -> Option<EncodedImage> {
        if index >= self.images.len() {
            return None;
        }
        let removed = self.images.remove(index);
        if self.images.is_empty() {
            self.cleared = true;
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.cleared = true;
    }
}

/// How a submit affects the stored images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    /// Keep what the record had.
    Unchanged,
    /// Store no images.
    Cleared,
    Replaced(Vec<EncodedImage>),
}

impl ImageChange {
    /// Newly encoded images are added to the preview, or take the slot of
    /// a single-image entity. Without them an explicit clear counts, then
    /// the preview when it differs from the original.
    fn decide(
        arity: ImageArity,
        preview: &PreviewSet,
        original: &[EncodedImage],
        mut fresh: Vec<EncodedImage>,
    ) -> Self {
        if !fresh.is_empty() {
            if arity == ImageArity::Single {
                fresh.truncate(1);
                return Self::Replaced(fresh);
            }
            let mut images = preview.images.clone();
            images.extend(fresh);
            return Self::Replaced(images);
        }
        if preview.cleared && preview.images.is_empty() {
            return Self::Cleared;
        }
        if preview.images != original {
            return Self::Replaced(preview.images.clone());
        }
        Self::Unchanged
    }

    fn resolve(self, original: &[EncodedImage]) -> Vec<EncodedImage> {
        match self {
            Self::Unchanged => original.to_vec(),
            Self::Cleared => Vec::new(),
            Self::Replaced(images) => images,
        }
    }
}

/// Drives the form of one entity kind.
pub struct EntityFormController {
    admin: Admin,
    schema: &'static EntitySchema,
    session: FormSession,
    preview: PreviewSet,
}

impl EntityFormController {
    pub(crate) fn new(admin: Admin, kind: EntityKind) -> Self {
        Self {
            admin,
            schema: schema_for(kind),
            session: FormSession::create(kind),
            preview: PreviewSet::default(),
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn preview(&self) -> &PreviewSet {
        &self.preview
    }

    /// Lets the operator rearrange the previewed images before submitting.
    pub fn preview_mut(&mut self) -> &mut PreviewSet {
        &mut self.preview
    }

    /// Resets to an empty create form.
    pub fn begin_create(&mut self) -> FormValues {
        self.reset();
        FormValues::new()
    }

    /// Loads a record into the form. The preview starts with its images.
    pub async fn begin_edit(&mut self, id: &RecordId) -> Result<FormValues, FormError> {
        let record = self.load(id).await?;
        let images = self.stored_images(&record.fields);
        self.session = FormSession {
            entity: self.schema.kind,
            mode: FormMode::Edit,
            editing_id: Some(record.id.clone()),
            original_images: images.clone(),
        };
        self.preview = PreviewSet {
            images,
            cleared: false,
        };
        debug!(kind = %self.schema.kind, %id, "editing record");
        Ok(FormValues::from_record(self.schema, &record))
    }

    /// Saves the form: creates in create mode, fully replaces in edit mode.
    ///
    /// On failure the session and preview are left as they were so the
    /// operator can retry.
    pub async fn submit(
        &mut self,
        values: FormValues,
        files: Vec<ImageSource>,
    ) -> Result<RecordId, FormError> {
        self.save(values, files, false).await
    }

    /// Saves with the status forced to draft.
    pub async fn submit_draft(
        &mut self,
        values: FormValues,
        files: Vec<ImageSource>,
    ) -> Result<RecordId, FormError> {
        if !self.schema.supports_draft() {
            let err = FormError::DraftUnsupported(self.schema.kind);
            self.admin.view.notify(Notice::error(err.to_string()));
            return Err(err);
        }
        self.save(values, files, true).await
    }

    async fn save(
        &mut self,
        mut values: FormValues,
        files: Vec<ImageSource>,
        draft: bool,
    ) -> Result<RecordId, FormError> {
        if draft {
            values = values.with_text("status", DRAFT);
        }

        let picked = files.len();
        let fresh = if self.schema.images == ImageArity::None {
            Vec::new()
        } else {
            self.admin.intake.encode_all(files).await
        };
        if fresh.len() < picked && self.schema.images != ImageArity::None {
            self.admin.view.notify(Notice::info(format!(
                "{} of {picked} images could not be used",
                picked - fresh.len()
            )));
        }

        let change = ImageChange::decide(
            self.schema.images,
            &self.preview,
            &self.session.original_images,
            fresh,
        );
        let images = change.resolve(&self.session.original_images);
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let fields = match assemble(self.schema, &values, images, &today) {
            Ok(fields) => fields,
            Err(err) => {
                self.admin.view.notify(Notice::error(err.to_string()));
                return Err(err);
            }
        };
        let title = title_of(self.schema, &fields);
        let collection = self.schema.collection();

        let saved = match self.session.editing_id.clone() {
            None => {
                self.admin.view.notify(Notice::info("Saving..."));
                self.admin.persistence.add(collection, fields).await
            }
            Some(id) => {
                self.admin.view.notify(Notice::info("Updating..."));
                self.admin
                    .persistence
                    .update(collection, &id, fields)
                    .await
                    .then_some(id)
            }
        };
        let Some(id) = saved else {
            self.admin.view.notify(Notice::error(SAVE_FAILED));
            return Err(FormError::SaveFailed {
                kind: self.schema.kind,
            });
        };

        let (notice, activity) = match (self.session.mode, draft) {
            (_, true) => ("Draft saved!".to_string(), format!("Draft saved: {title}")),
            (FormMode::Create, false) => (
                format!("{} added!", self.schema.label),
                format!("New {} added: {title}", self.schema.label.to_lowercase()),
            ),
            (FormMode::Edit, false) => (
                format!("{} updated!", self.schema.label),
                format!("{} updated: {title}", self.schema.label),
            ),
        };
        info!(kind = %self.schema.kind, %id, "record saved");
        self.admin.view.notify(Notice::success(notice));
        self.admin.activity().record(&activity).await;
        self.reset();
        self.refresh().await;
        Ok(id)
    }

    /// Deletes a record after confirmation. `Ok(false)` when the operator
    /// declined.
    pub async fn delete(&mut self, id: &RecordId) -> Result<bool, FormError> {
        let collection = self.schema.collection();
        let record = self.load(id).await?;
        let prompt = format!("Delete this {}?", self.schema.label.to_lowercase());
        if !self.admin.view.confirm(&prompt).await {
            debug!(kind = %self.schema.kind, %id, "delete declined");
            return Ok(false);
        }
        if !self.admin.persistence.delete(collection, id).await {
            self.admin.view.notify(Notice::error(format!(
                "Error deleting {}.",
                self.schema.label.to_lowercase()
            )));
            return Err(FormError::DeleteFailed {
                kind: self.schema.kind,
            });
        }

        info!(kind = %self.schema.kind, %id, "record deleted");
        self.admin
            .view
            .notify(Notice::success(format!("{} deleted", self.schema.label)));
        self.admin
            .activity()
            .record(&format!(
                "{} deleted: {}",
                self.schema.label,
                title_of(self.schema, &record.fields)
            ))
            .await;
        if self.session.editing_id.as_ref() == Some(id) {
            self.reset();
        }
        self.refresh().await;
        Ok(true)
    }

    /// Dispatches a row action from the list view.
    pub async fn handle_action(
        &mut self,
        action: &RowAction,
    ) -> Result<Option<FormValues>, FormError> {
        match action {
            RowAction::Edit(id) => self.begin_edit(id).await.map(Some),
            RowAction::Delete(id) => self.delete(id).await.map(|_| None),
        }
    }

    fn reset(&mut self) {
        self.session = FormSession::create(self.schema.kind);
        self.preview = PreviewSet::default();
    }

    async fn refresh(&self) {
        self.admin.refresh_list(self.schema.kind).await;
        if self.schema.feeds_dashboard {
            self.admin.refresh_dashboard().await;
        }
    }

    /// Fetches the record an edit or delete refers to, telling a vanished
    /// record apart from a backend that did not answer.
    async fn load(&self, id: &RecordId) -> Result<Record, FormError> {
        let label = self.schema.label.to_lowercase();
        match self.admin.persistence.try_get_one(self.schema.collection(), id).await {
            Some(Some(record)) => Ok(record),
            Some(None) => {
                self.admin
                    .view
                    .notify(Notice::error(format!("This {label} no longer exists.")));
                Err(FormError::NotFound {
                    kind: self.schema.kind,
                    id: id.clone(),
                })
            }
            None => {
                self.admin.view.notify(Notice::error(format!(
                    "Could not load this {label}. Try again."
                )));
                Err(FormError::LoadFailed {
                    kind: self.schema.kind,
                    id: id.clone(),
                })
            }
        }
    }

    fn stored_images(&self, fields: &Fields) -> Vec<EncodedImage> {
        match self.schema.images.field().and_then(|key| fields.get(key)) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(EncodedImage::parse)
                .collect(),
            Some(Value::String(single)) => EncodedImage::parse(single).into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

fn title_of(schema: &EntitySchema, fields: &Fields) -> String {
    match fields.get(schema.title_field) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => "(untitled)".to_string(),
    }
}
