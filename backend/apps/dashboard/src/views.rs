//! Dashboard Views
//!
//! The screens of the plantation dashboard. Page content is rendered by
//! the frontend; the backend answers each protected screen with a view
//! descriptor carrying the signed-in identity and the sidebar entries.

use auth::middleware::CurrentIdentity;
use auth::models::{Identity, IdentityResponse};
use axum::Json;
use serde::Serialize;

/// Protected screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    FieldMapping,
    TaskScheduling,
    HarvestManagement,
    FertilizerManagement,
    PestControl,
    Workforce,
    Financial,
    Reports,
    Settings,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Dashboard,
        View::FieldMapping,
        View::TaskScheduling,
        View::HarvestManagement,
        View::FertilizerManagement,
        View::PestControl,
        View::Workforce,
        View::Financial,
        View::Reports,
        View::Settings,
    ];

    pub const fn path(&self) -> &'static str {
        use View::*;
        match self {
            Dashboard => "/dashboard",
            FieldMapping => "/field-mapping",
            TaskScheduling => "/task-scheduling",
            HarvestManagement => "/harvest-management",
            FertilizerManagement => "/fertilizer-management",
            PestControl => "/pest-control",
            Workforce => "/workforce",
            Financial => "/financial",
            Reports => "/reports",
            Settings => "/settings",
        }
    }

    pub const fn title(&self) -> &'static str {
        use View::*;
        match self {
            Dashboard => "Dashboard",
            FieldMapping => "Field Mapping",
            TaskScheduling => "Task Scheduling",
            HarvestManagement => "Harvest Management",
            FertilizerManagement => "Fertilizer Management",
            PestControl => "Pest Control",
            Workforce => "Workforce",
            Financial => "Financial",
            Reports => "Reports",
            Settings => "Settings",
        }
    }

    /// Settings is reached from the header, not the sidebar
    pub const fn in_sidebar(&self) -> bool {
        !matches!(self, View::Settings)
    }
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub fn navigation() -> Vec<NavItem> {
    View::ALL
        .iter()
        .filter(|view| view.in_sidebar())
        .map(|view| NavItem {
            path: view.path(),
            label: view.title(),
        })
        .collect()
}

/// Descriptor returned for a protected screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub view: View,
    pub title: &'static str,
    pub identity: IdentityResponse,
    pub navigation: Vec<NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

pub fn render(view: View, identity: &Identity) -> ViewResponse {
    let greeting = matches!(view, View::Dashboard)
        .then(|| format!("Welcome back, {}", identity.greeting_name()));

    ViewResponse {
        view,
        title: view.title(),
        identity: IdentityResponse::from(identity),
        navigation: navigation(),
        greeting,
    }
}

/// Handler for one protected screen
pub async fn protected_view(
    view: View,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<ViewResponse> {
    tracing::debug!(view = view.path(), identity_id = %identity.id, "Rendering view");
    Json(render(view, &identity))
}

/// Descriptor of the public login screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginViewResponse {
    pub view: &'static str,
    pub title: &'static str,
}

/// GET /login
pub async fn login_view() -> Json<LoginViewResponse> {
    Json(LoginViewResponse {
        view: "login",
        title: "Login",
    })
}
