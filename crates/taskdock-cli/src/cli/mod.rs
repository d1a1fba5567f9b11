/*
[INPUT]:  User interaction entry points
[OUTPUT]: CLI flow modules
[POS]:    CLI layer - module wiring
[UPDATE]: When adding new CLI flows
*/

pub mod interactive;
