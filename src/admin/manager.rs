//! Admin content manager state machine.
//!
//! ```text
//! Loading ──load──▶ ListLoaded(Idle) ──open_create/open_edit──▶ ListLoaded(FormOpen)
//!                        ▲    │                                      │
//!                        │    └─request_delete──▶ ListLoaded(ConfirmDelete)
//!                        └──── submit / confirm_delete (write, then reload) ◀─┘
//! ```
//!
//! A failed network call is logged and leaves the state untouched. After a
//! successful write the list is fetched again in full; if only that re-fetch
//! fails, the form still closes and the previous list is kept.

use std::marker::PhantomData;
use thiserror::Error;

use super::client::ClientError;
use super::resource::{Resource, ResourceBackend};

/// What the open form will do on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(i64),
}

pub enum Mode<R: Resource> {
    Idle,
    FormOpen { target: FormTarget, form: R::Form },
    /// Waiting for the operator to confirm deleting this id.
    ConfirmDelete(i64),
}

pub enum ManagerState<R: Resource> {
    Loading,
    ListLoaded { items: Vec<R::Item>, mode: Mode<R> },
}

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("cannot {0} in the current state")]
    InvalidTransition(&'static str),

    #[error("no record with id {0}")]
    UnknownItem(i64),
}

pub struct Manager<R: Resource, B: ResourceBackend<R>> {
    backend: B,
    state: ManagerState<R>,
    _resource: PhantomData<R>,
}

impl<R: Resource, B: ResourceBackend<R>> Manager<R, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ManagerState::Loading,
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> &ManagerState<R> {
        &self.state
    }

    /// Loaded records; empty while loading.
    pub fn items(&self) -> &[R::Item] {
        match &self.state {
            ManagerState::Loading => &[],
            ManagerState::ListLoaded { items, .. } => items,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(
            self.state,
            ManagerState::ListLoaded {
                mode: Mode::Idle,
                ..
            }
        )
    }

    pub fn form_target(&self) -> Option<FormTarget> {
        match &self.state {
            ManagerState::ListLoaded {
                mode: Mode::FormOpen { target, .. },
                ..
            } => Some(*target),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut R::Form> {
        match &mut self.state {
            ManagerState::ListLoaded {
                mode: Mode::FormOpen { form, .. },
                ..
            } => Some(form),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        match &self.state {
            ManagerState::ListLoaded {
                mode: Mode::ConfirmDelete(id),
                ..
            } => Some(*id),
            _ => None,
        }
    }

    /// Fetches the full list and returns to `ListLoaded(Idle)`.
    pub async fn load(&mut self) -> Result<(), ManagerError> {
        let items = self.fetch().await?;
        self.state = ManagerState::ListLoaded {
            items,
            mode: Mode::Idle,
        };
        Ok(())
    }

    pub fn open_create(&mut self) -> Result<(), ManagerError> {
        self.set_mode("open a form", |_| {
            Ok(Mode::FormOpen {
                target: FormTarget::Create,
                form: R::blank_form(),
            })
        })
    }

    /// Opens the form pre-filled with the record `id`.
    pub fn open_edit(&mut self, id: i64) -> Result<(), ManagerError> {
        self.set_mode("open a form", |items| {
            let item = find::<R>(items, id)?;
            Ok(Mode::FormOpen {
                target: FormTarget::Edit(id),
                form: R::form_from(item),
            })
        })
    }

    /// Asks for confirmation before deleting `id`. Nothing is sent yet.
    pub fn request_delete(&mut self, id: i64) -> Result<(), ManagerError> {
        self.set_mode("delete", |items| {
            find::<R>(items, id)?;
            Ok(Mode::ConfirmDelete(id))
        })
    }

    /// Closes the form or drops the pending delete.
    pub fn cancel(&mut self) {
        if let ManagerState::ListLoaded { mode, .. } = &mut self.state {
            *mode = Mode::Idle;
        }
    }

    /// Creates or updates, depending on how the form was opened, then reloads.
    pub async fn submit(&mut self) -> Result<R::Item, ManagerError> {
        let (target, form) = match &self.state {
            ManagerState::ListLoaded {
                mode: Mode::FormOpen { target, form },
                ..
            } => (*target, form.clone()),
            _ => return Err(ManagerError::InvalidTransition("submit")),
        };

        let saved = match target {
            FormTarget::Create => self.backend.create(&form).await,
            FormTarget::Edit(id) => self.backend.update(id, &form).await,
        }
        .inspect_err(|e| tracing::warn!(resource = R::LABEL, error = %e, "Save failed"))?;

        tracing::info!(resource = R::LABEL, id = R::id(&saved), "Saved");
        self.refresh_after_write().await;
        Ok(saved)
    }

    /// Sends the delete confirmed by [`Self::request_delete`], then reloads.
    pub async fn confirm_delete(&mut self) -> Result<(), ManagerError> {
        let id = self
            .pending_delete()
            .ok_or(ManagerError::InvalidTransition("confirm a delete"))?;

        self.backend
            .delete(id)
            .await
            .inspect_err(|e| tracing::warn!(resource = R::LABEL, id, error = %e, "Delete failed"))?;

        tracing::info!(resource = R::LABEL, id, "Deleted");
        self.refresh_after_write().await;
        Ok(())
    }

    async fn fetch(&self) -> Result<Vec<R::Item>, ManagerError> {
        self.backend.list().await.map_err(|e| {
            tracing::warn!(resource = R::LABEL, error = %e, "Loading list failed");
            ManagerError::from(e)
        })
    }

    async fn refresh_after_write(&mut self) {
        match self.fetch().await {
            Ok(items) => {
                self.state = ManagerState::ListLoaded {
                    items,
                    mode: Mode::Idle,
                };
            }
            Err(_) => self.cancel(),
        }
    }

    fn set_mode(
        &mut self,
        action: &'static str,
        next: impl FnOnce(&[R::Item]) -> Result<Mode<R>, ManagerError>,
    ) -> Result<(), ManagerError> {
        match &mut self.state {
            ManagerState::ListLoaded { items, mode } if matches!(mode, Mode::Idle) => {
                *mode = next(items)?;
                Ok(())
            }
            _ => Err(ManagerError::InvalidTransition(action)),
        }
    }
}

fn find<R: Resource>(items: &[R::Item], id: i64) -> Result<&R::Item, ManagerError> {
    items
        .iter()
        .find(|item| R::id(item) == id)
        .ok_or(ManagerError::UnknownItem(id))
}
