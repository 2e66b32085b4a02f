// Core module - Cash drawer control logic
pub mod drawer;
