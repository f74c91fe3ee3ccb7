use std::sync::{Arc, RwLock};

use crate::model::real_estate::RealEstateDto;

/// The currently loaded page of listings
#[derive(Debug, Clone, Default)]
pub struct RealEstateDirectory {
    estates: Arc<RwLock<Vec<RealEstateDto>>>,
}

impl RealEstateDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, estates: Vec<RealEstateDto>) {
        *self.estates.write().unwrap_or_else(|e| e.into_inner()) = estates;
    }

    pub fn all(&self) -> Vec<RealEstateDto> {
        self.estates.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<RealEstateDto> {
        self.estates
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|estate| estate.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.estates.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
