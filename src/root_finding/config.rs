//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tol`      : dual-criterion error tolerance
//! └ `max_iter` : iteration cap
//!
//! [`CommonCfg::new`] initializes configuration with default values.


use super::algorithms::DEFAULT_MAX_ITER;


pub const DEFAULT_TOL: f64 = 1e-4;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol: f64,
    max_iter: usize,
}

impl CommonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tol(&self)      -> f64   { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tol      (&mut self, v: f64)   { self.tol      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn tol(&self) -> f64 {
                self.common.tol()
            }
            pub fn max_iter(&self) -> usize {
                self.common.max_iter()
            }
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidTol { got: v }
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
