pub mod use_viewport;
