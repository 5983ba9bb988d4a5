/// Cellular automaton smoothing passes
pub mod automaton;
/// Flood fill connectivity and cave classification
pub mod connectivity;
/// Map generation driver with retry on rejected layouts
pub mod executor;
/// Bit-packed solid snapshot for neighbour counting
pub mod mask;
/// Random fill of the corner lattice
pub mod randomizer;
