use nalgebra::Point3;

/// Represents where the solver grid is centered.
///
/// A center is either an explicit point in space or a reference to one of the
/// molecules loaded alongside the parameter block, in which case the solver
/// centers the grid on that molecule's geometry at setup time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCenter {
    /// An explicit center position in Angstroms.
    Point(Point3<f64>),
    /// A zero-based index into the loaded molecule list.
    Molecule(usize),
}

impl Default for GridCenter {
    fn default() -> Self {
        GridCenter::Point(Point3::origin())
    }
}
