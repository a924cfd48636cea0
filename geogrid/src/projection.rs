//! See [`Projection`].

/// Two-way mapping between points of two coordinate systems.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Maps an input point into the output coordinate system. Returns `None` if the point cannot be mapped.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Maps an output point back into the input coordinate system. Returns `None` if the point cannot be mapped.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;

    /// Projects all the points of a sequence, failing if any one of them fails.
    fn project_all<'a>(
        &self,
        points: impl IntoIterator<Item = &'a Self::InPoint>,
    ) -> Option<Vec<Self::OutPoint>>
    where
        Self::InPoint: 'a,
    {
        points.into_iter().map(|p| self.project(p)).collect()
    }
}
