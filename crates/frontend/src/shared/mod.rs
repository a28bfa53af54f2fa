pub mod api_utils;
pub mod components;
pub mod dynamic_view;
pub mod icons;
