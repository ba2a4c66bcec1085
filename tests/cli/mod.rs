
mod errors;
mod minimax;
mod search;
mod weighted;
