//! Notification categories and actions in SDK shape
//!
//! Order is part of the contract: output index `i` always corresponds to
//! input index `i`, for categories and for the actions inside them.

use crate::config::{NotificationAction, NotificationCategory};
use crate::platform::PlatformContext;
use crate::resolver::resources::resolve_resource;
use crate::sdk::{SdkAction, SdkCategory};

pub fn resolve_categories<P>(categories: &[NotificationCategory], platform: &P) -> Vec<SdkCategory>
where
    P: PlatformContext + ?Sized,
{
    categories
        .iter()
        .map(|category| SdkCategory {
            id: category.identifier.clone(),
            actions: resolve_actions(&category.actions, platform),
        })
        .collect()
}

pub fn resolve_actions<P>(actions: &[NotificationAction], platform: &P) -> Vec<SdkAction>
where
    P: PlatformContext + ?Sized,
{
    actions
        .iter()
        .map(|action| SdkAction {
            id: action.identifier.clone(),
            icon: resolve_resource(platform, &action.icon),
            title: action.title.clone(),
            brings_app_to_foreground: action.foreground,
            input_placeholder: action.text_input_placeholder.clone(),
            mo_message: action.mo_required,
        })
        .collect()
}
