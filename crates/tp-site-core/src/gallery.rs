//! Gallery modal state.
//!
//! The index always stays in `[0, len)`: stepping wraps in both directions.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub path: String,
    pub title: String,
    pub description: String,
}

impl GalleryImage {
    pub fn new(path: &str, title: &str, description: &str) -> Self {
        Self {
            path: path.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

pub fn default_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(
            "images/impresion-industrial.png",
            "Prototipos Industriales",
            "Componentes técnicos de alta precisión",
        ),
        GalleryImage::new(
            "images/robot-prototipo.jpg",
            "Robot de Grabado Láser",
            "Prototipo funcional completo",
        ),
        GalleryImage::new(
            "images/impresion-3d-general.jpg",
            "Proyectos Diversos",
            "Variedad de aplicaciones y materiales",
        ),
        GalleryImage::new(
            "images/organizador-personal.jpg",
            "Organizadores Personales",
            "Soluciones de organización a medida",
        ),
    ]
}

/// What a key press did to the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Previous,
    Next,
    Close,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GalleryState {
    images: Vec<GalleryImage>,
    index: usize,
    open: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            images: default_images(),
            index: 0,
            open: false,
        }
    }
}

impl GalleryState {
    pub fn new(images: Vec<GalleryImage>) -> Result<Self, SiteError> {
        if images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        Ok(Self {
            images,
            index: 0,
            open: false,
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> &GalleryImage {
        &self.images[self.index]
    }

    pub fn open(&mut self, index: usize) -> &GalleryImage {
        self.index = index % self.len();
        self.open = true;
        self.current()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> &GalleryImage {
        self.index = (self.index + 1) % self.len();
        self.current()
    }

    pub fn previous(&mut self) -> &GalleryImage {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Keyboard navigation; only reacts while the modal is open.
    pub fn on_key(&mut self, key: &str) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        match key {
            "ArrowLeft" => {
                self.previous();
                KeyOutcome::Previous
            }
            "ArrowRight" => {
                self.next();
                KeyOutcome::Next
            }
            "Escape" => {
                self.close();
                KeyOutcome::Close
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
