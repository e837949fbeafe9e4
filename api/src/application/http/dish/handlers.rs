pub mod identify_dish;
