//! The [`DomainBlock`] container and its builder.

use crate::bounds::AxisBounds;
use crate::device::DeviceImage;
use crate::error::DomainError;
use crate::particles::ParticleSet;
use silt_core::{Axis, FieldChannel};

/// The per-domain container for field and particle state.
///
/// One block exists per local domain. It owns one dense `f64` array per
/// [`FieldChannel`] over the full local extent (ghost cells included),
/// a fixed-capacity [`ParticleSet`], the physical [`AxisBounds`] per
/// axis, and the [`DeviceImage`] the compute pipeline reads.
///
/// Storage is row-major with `i` fastest: cell `(k, j, i)` lives at
/// `(k * nj + j) * ni + i`. Index ranges are valid by construction;
/// accessors `debug_assert` instead of checking in release paths.
///
/// # Examples
///
/// ```
/// use silt_core::{Axis, FieldChannel};
/// use silt_domain::DomainBlock;
///
/// let mut block = DomainBlock::builder()
///     .extent([8, 8, 8])
///     .bounds(Axis::I, 0.0, 1.0)
///     .bounds(Axis::J, 0.0, 1.0)
///     .bounds(Axis::K, 0.0, 1.0)
///     .particle_capacity(16)
///     .build()
///     .unwrap();
///
/// block.field_mut(FieldChannel::Density).fill(1.0);
/// block.publish();
/// assert_eq!(block.device().generation(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DomainBlock {
    extent: [usize; 3],
    bounds: [AxisBounds; 3],
    fields: [Vec<f64>; FieldChannel::COUNT],
    particles: ParticleSet,
    device: DeviceImage,
}

impl DomainBlock {
    /// Start building a block. Extent and all three axis bounds are
    /// required; particle capacity defaults to zero.
    pub fn builder() -> DomainBlockBuilder {
        DomainBlockBuilder {
            extent: None,
            bounds: [None; 3],
            particle_capacity: 0,
        }
    }

    /// Full local extent (cells, ghosts included) along `axis`.
    pub fn extent(&self, axis: Axis) -> usize {
        self.extent[axis.index()]
    }

    /// Physical bounds of the domain along `axis`.
    pub fn bounds(&self, axis: Axis) -> AxisBounds {
        self.bounds[axis.index()]
    }

    /// Total number of cells in the block.
    pub fn cell_count(&self) -> usize {
        self.fields[0].len()
    }

    /// Number of particles. Fixed at construction.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Flat index of cell `(k, j, i)`, `i` fastest.
    pub fn cell_index(&self, k: usize, j: usize, i: usize) -> usize {
        debug_assert!(i < self.extent(Axis::I), "i index {i} out of range");
        debug_assert!(j < self.extent(Axis::J), "j index {j} out of range");
        debug_assert!(k < self.extent(Axis::K), "k index {k} out of range");
        (k * self.extent(Axis::J) + j) * self.extent(Axis::I) + i
    }

    /// Flat read-only view of one host-side field channel.
    pub fn field(&self, channel: FieldChannel) -> &[f64] {
        &self.fields[channel.index()]
    }

    /// Flat mutable view of one host-side field channel.
    pub fn field_mut(&mut self, channel: FieldChannel) -> &mut [f64] {
        &mut self.fields[channel.index()]
    }

    /// Read the host-side value of `channel` at cell `(k, j, i)`.
    pub fn field_at(&self, channel: FieldChannel, k: usize, j: usize, i: usize) -> f64 {
        let idx = self.cell_index(k, j, i);
        self.fields[channel.index()][idx]
    }

    /// Write the host-side value of `channel` at cell `(k, j, i)`.
    pub fn set_field(&mut self, channel: FieldChannel, k: usize, j: usize, i: usize, value: f64) {
        let idx = self.cell_index(k, j, i);
        self.fields[channel.index()][idx] = value;
    }

    /// The host-side particle population.
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Mutable access to the host-side particle population.
    pub fn particles_mut(&mut self) -> &mut ParticleSet {
        &mut self.particles
    }

    /// The published device-side image.
    pub fn device(&self) -> &DeviceImage {
        &self.device
    }

    /// Publish the host-side state to the device image.
    ///
    /// Replaces the whole image (fields, particle slots, activity flags)
    /// and advances its generation. A synchronous barrier with respect to
    /// this block's data: once `publish` returns, the device image
    /// reflects every prior host write.
    pub fn publish(&mut self) {
        self.device.fields.clone_from(&self.fields);
        self.device.particles.clone_from(&self.particles);
        self.device.generation += 1;
    }
}

/// Builder for [`DomainBlock`]. All validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct DomainBlockBuilder {
    extent: Option<[usize; 3]>,
    bounds: [Option<(f64, f64)>; 3],
    particle_capacity: usize,
}

impl DomainBlockBuilder {
    /// Set the full local extent `[ni, nj, nk]`, ghost cells included.
    pub fn extent(mut self, extent: [usize; 3]) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Set the physical bounds `[begin, end)` along `axis`.
    pub fn bounds(mut self, axis: Axis, begin: f64, end: f64) -> Self {
        self.bounds[axis.index()] = Some((begin, end));
        self
    }

    /// Set the particle capacity (default 0).
    pub fn particle_capacity(mut self, capacity: usize) -> Self {
        self.particle_capacity = capacity;
        self
    }

    /// Build the block, validating extent and bounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the extent is missing, any extent component is
    /// zero, the cell count overflows, or any axis bounds are missing or
    /// invalid.
    pub fn build(self) -> Result<DomainBlock, DomainError> {
        let extent = self.extent.ok_or(DomainError::MissingExtent)?;
        for axis in Axis::ALL {
            if extent[axis.index()] == 0 {
                return Err(DomainError::EmptyExtent { axis });
            }
        }
        let cell_count = extent[0]
            .checked_mul(extent[1])
            .and_then(|n| n.checked_mul(extent[2]))
            .ok_or(DomainError::CellCountOverflow { extent })?;

        let resolve = |axis: Axis| -> Result<AxisBounds, DomainError> {
            let (begin, end) = self.bounds[axis.index()]
                .ok_or(DomainError::MissingBounds { axis })?;
            AxisBounds::new(axis, begin, end)
        };
        let bounds = [resolve(Axis::I)?, resolve(Axis::J)?, resolve(Axis::K)?];

        let fields: [Vec<f64>; FieldChannel::COUNT] =
            std::array::from_fn(|_| vec![0.0; cell_count]);
        let particles = ParticleSet::new(self.particle_capacity);
        let device = DeviceImage {
            fields: fields.clone(),
            particles: particles.clone(),
            generation: 0,
        };

        Ok(DomainBlock {
            extent,
            bounds,
            fields,
            particles,
            device,
        })
    }
}
