//! Server-rendered HTML: full pages and HTMX fragments.
//!
//! Markup lives in the Handlebars templates under `templates/`, compiled
//! once into a shared registry. Values interpolated with `{{ }}` are
//! HTML-escaped by the engine.

pub mod pages;
pub mod tables;

use std::sync::LazyLock;

use axum::{
    http::{HeaderName, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use handlebars::{Handlebars, RenderError};
use serde::Serialize;
use thiserror::Error;

use crate::ApiError;
use repairdesk_core::Entity;

/// Header that makes HTMX fire a client-side event.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

const TEMPLATES: [(&str, &str); 5] = [
    ("layout", include_str!("../../templates/layout.hbs")),
    ("login", include_str!("../../templates/login.hbs")),
    ("index", include_str!("../../templates/index.hbs")),
    ("table", include_str!("../../templates/table.hbs")),
    ("notice", include_str!("../../templates/notice.hbs")),
];

static REGISTRY: LazyLock<Result<Handlebars<'static>, String>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    for (name, source) in TEMPLATES {
        registry
            .register_template_string(name, source)
            .map_err(|e| format!("{name}: {e}"))?;
    }
    Ok(registry)
});

/// Page rendering failures.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A bundled template did not compile.
    #[error("template compilation failed: {0}")]
    Compile(String),

    /// Rendering a compiled template failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The compiled template registry.
///
/// # Errors
///
/// Returns [`ViewError::Compile`] if a bundled template is malformed.
pub fn templates() -> Result<&'static Handlebars<'static>, ViewError> {
    REGISTRY
        .as_ref()
        .map_err(|reason| ViewError::Compile(reason.clone()))
}

fn render<T: Serialize>(name: &str, data: &T) -> Result<String, ViewError> {
    Ok(templates()?.render(name, data)?)
}

/// Name of the client event that reloads an entity's table.
#[must_use]
pub fn refresh_event(entity: Entity) -> String {
    format!("refresh-{}", entity.plural())
}

/// Outcome of a mutating fragment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The mutation went through; the entity's table should reload.
    Success {
        /// Entity that changed.
        entity: Entity,
        /// Text shown to the user.
        message: String,
    },
    /// The mutation was refused.
    Error {
        /// Text shown to the user.
        message: String,
    },
}

#[derive(Serialize)]
struct NoticeView<'a> {
    kind: &'static str,
    message: &'a str,
}

impl Notice {
    /// A success notice for `entity`.
    #[must_use]
    pub fn success(entity: Entity, message: impl Into<String>) -> Self {
        Self::Success {
            entity,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Renders the notice markup.
    pub fn render(&self) -> Result<String, ViewError> {
        let view = match self {
            Self::Success { message, .. } => NoticeView {
                kind: "success",
                message,
            },
            Self::Error { message } => NoticeView {
                kind: "error",
                message,
            },
        };
        render("notice", &view)
    }
}

impl IntoResponse for Notice {
    fn into_response(self) -> Response {
        let html = match self.render() {
            Ok(html) => html,
            Err(e) => return ApiError::from(e).into_response(),
        };

        let mut response = Html(html).into_response();
        if let Self::Success { entity, .. } = &self
            && let Ok(value) = HeaderValue::from_str(&refresh_event(*entity))
        {
            response.headers_mut().insert(HX_TRIGGER, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_templates_compile() {
        let registry = templates().unwrap();
        for (name, _) in TEMPLATES {
            assert!(registry.has_template(name), "missing template {name}");
        }
    }

    #[test]
    fn test_success_notice_sets_trigger() {
        let response = Notice::success(Entity::School, "School created").into_response();
        assert_eq!(response.headers()[HX_TRIGGER], "refresh-schools");
    }

    #[test]
    fn test_error_notice_has_no_trigger() {
        let response = Notice::error("School is still referenced").into_response();
        assert!(response.headers().get(HX_TRIGGER).is_none());
        assert!(response.status().is_success());
    }

    #[test]
    fn test_notice_escapes_message() {
        let html = Notice::error(r#"<b>bad</b> & "worse""#).render().unwrap();
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt; &amp; &quot;worse&quot;"));
        assert!(html.contains("notice-error"));
    }
}
