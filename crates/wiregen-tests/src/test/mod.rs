mod ambiguity;
mod determinism;
mod scenario;
