pub mod header;
pub mod calculator_form;
pub mod status_panels;
pub mod results_table;
