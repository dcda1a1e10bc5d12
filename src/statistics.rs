use crate::category::Category;
use crate::simulation::GasSimulation;
use crate::Scalar;

pub trait SimulationStatistics {
    fn total_time(&self) -> Scalar;
    fn total_mass(&self) -> Scalar;
    fn num_particles(&self) -> usize;
    fn mean_speed(&self) -> Scalar;
    /// Particles per category, indexed like `Category::ALL`. `None` for an ideal gas.
    fn category_counts(&self) -> Option<[usize; 4]>;

    /// The running average shown next to the plot. Zero for an empty box.
    fn average_mass(&self) -> Scalar {
        match self.num_particles() {
            0 => 0.,
            n => self.total_mass() / n as Scalar,
        }
    }
}

impl SimulationStatistics for GasSimulation {
    fn total_time(&self) -> Scalar {
        self.frame() as Scalar * self.params().dt_scale
    }

    fn total_mass(&self) -> Scalar {
        self.state().masses.iter().sum()
    }

    fn num_particles(&self) -> usize {
        self.state().len()
    }

    fn mean_speed(&self) -> Scalar {
        match self.state().len() {
            0 => 0.,
            n => self.state().speeds.iter().sum::<Scalar>() / n as Scalar,
        }
    }

    fn category_counts(&self) -> Option<[usize; 4]> {
        self.state().categories.as_ref().map(|categories| {
            let mut counts = [0; 4];
            for category in categories {
                counts[category.index()] += 1;
            }
            counts
        })
    }
}

/// Pairs each category with its count, for logging.
pub fn labelled_counts(counts: [usize; 4]) -> impl Iterator<Item = (Category, usize)> {
    Category::ALL.to_vec().into_iter().zip(counts.to_vec())
}
