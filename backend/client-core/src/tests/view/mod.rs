mod flow;
mod state;
