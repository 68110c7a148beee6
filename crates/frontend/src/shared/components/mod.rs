pub mod date_range_picker;
pub mod facet_select;
pub mod filter_panel;
pub mod form_field;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_select;
