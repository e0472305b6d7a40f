pub mod pages;
pub mod site;
