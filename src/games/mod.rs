pub mod memorymatch;
