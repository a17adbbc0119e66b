mod tokens;
mod trips;
