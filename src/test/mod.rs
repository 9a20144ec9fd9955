mod models;
mod yahoo;
