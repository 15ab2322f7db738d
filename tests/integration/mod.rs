//! Integration tests driving the compiled binary against real repositories

mod helpers;
