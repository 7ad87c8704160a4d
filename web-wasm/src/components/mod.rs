pub mod info_panel;
pub mod map_view;
pub mod park_select;
pub mod popup;
