pub mod api_response;
pub mod dynamic_view;
