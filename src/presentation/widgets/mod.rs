mod add_product_form;
mod input;
mod product_card;
mod status_bar;

pub use add_product_form::{AddProductForm, DraftField, FormSubmit};
pub use input::{NumericBounds, TextInput};
pub use product_card::{ProductCard, ProductCardView, ReviewField};
pub use status_bar::{StatusBar, StatusLevel};
