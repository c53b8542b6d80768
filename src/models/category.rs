//! Category records and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A post category. Deletion deactivates rather than removes.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Category {
    pub fn from_create(create: CategoryCreate) -> Self {
        let now = Utc::now();
        let slug = super::slugify(&create.name);
        Self {
            id: 0,
            name: create.name,
            slug,
            description: create.description,
            color: create.color,
            icon: create.icon,
            parent_id: create.parent_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.slug = super::slugify(&name);
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(icon) = update.icon {
            self.icon = Some(icon);
        }
        if let Some(parent_id) = update.parent_id {
            self.parent_id = Some(parent_id);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

fn default_color() -> String {
    "#2563eb".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<i64>,
    pub is_active: Option<bool>,
}
