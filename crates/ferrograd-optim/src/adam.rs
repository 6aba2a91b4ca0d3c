//! Adam Optimizer - Adaptive Moment Estimation
//!
//! Implements Adam with an optional AMSGrad variant.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use serde::{Deserialize, Serialize};

use ferrograd_core::{Error, Result};
use ferrograd_nn::Parameter;
use ferrograd_serialize::TensorData;
use ferrograd_tensor::{zeros, Tensor};

use crate::optimizer::Optimizer;

// =============================================================================
// AdamOptions
// =============================================================================

/// Hyperparameters for the Adam optimizer.
///
/// Options are validated when the optimizer is constructed and fixed for
/// its lifetime; the optimizer exposes them read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AdamOptions {
    /// Learning rate (required, must be positive).
    pub learning_rate: f64,
    /// Exponential decay rate for the first moment estimate.
    pub beta1: f64,
    /// Exponential decay rate for the second moment estimate.
    pub beta2: f64,
    /// L2 penalty coefficient added to the raw gradient.
    pub weight_decay: f64,
    /// Numerical-stability floor added to the denominator.
    pub eps: f64,
    /// Whether to use the AMSGrad variant.
    pub amsgrad: bool,
}

impl AdamOptions {
    /// Creates options with the given learning rate and defaults for the
    /// remaining hyperparameters.
    #[must_use]
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            weight_decay: 0.0,
            eps: 1e-8,
            amsgrad: false,
        }
    }

    /// Builder method to set both decay rates.
    #[must_use]
    pub fn betas(mut self, beta1: f64, beta2: f64) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    /// Builder method to set weight decay.
    #[must_use]
    pub fn weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Builder method to set epsilon.
    #[must_use]
    pub fn eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Builder method to enable AMSGrad.
    #[must_use]
    pub fn amsgrad(mut self, amsgrad: bool) -> Self {
        self.amsgrad = amsgrad;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::invalid_configuration(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.beta1) {
            return Err(Error::invalid_configuration(format!(
                "beta1 must be in [0, 1), got {}",
                self.beta1
            )));
        }
        if !(0.0..1.0).contains(&self.beta2) {
            return Err(Error::invalid_configuration(format!(
                "beta2 must be in [0, 1), got {}",
                self.beta2
            )));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(Error::invalid_configuration(format!(
                "weight decay must be non-negative, got {}",
                self.weight_decay
            )));
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::invalid_configuration(format!(
                "eps must be positive, got {}",
                self.eps
            )));
        }
        Ok(())
    }
}

// =============================================================================
// AdamStateDict
// =============================================================================

/// Serializable snapshot of an Adam optimizer's state.
///
/// Holds the four state collections as named fields in fixed order, each
/// aligned by index to the parameter sequence the optimizer was constructed
/// with. Options are not part of the snapshot and must be supplied
/// identically at reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdamStateDict {
    /// Per-parameter step counts.
    pub step_buffers: Vec<i64>,
    /// Per-parameter first moment estimates.
    pub exp_average_buffers: Vec<TensorData>,
    /// Per-parameter second raw moment estimates.
    pub exp_average_sq_buffers: Vec<TensorData>,
    /// Per-parameter running maxima of the second moment estimates.
    /// Present only for AMSGrad optimizers.
    #[serde(default)]
    pub max_exp_average_sq_buffers: Option<Vec<TensorData>>,
}

// =============================================================================
// Adam
// =============================================================================

/// Adam optimizer.
///
/// Maintains per-parameter adaptive learning rates using first and
/// second moment estimates of gradients.
///
/// Update rule:
/// ```text
/// m_t = beta1 * m_{t-1} + (1 - beta1) * grad
/// v_t = beta2 * v_{t-1} + (1 - beta2) * grad^2
/// m_hat = m_t / (1 - beta1^t)
/// v_hat = v_t / (1 - beta2^t)
/// param = param - lr * m_hat / (sqrt(v_hat) + eps)
/// ```
///
/// With `amsgrad` enabled the denominator uses the running element-wise
/// maximum of `v_t` instead of `v_t` itself, so the effective step size
/// never grows between steps.
pub struct Adam {
    /// Parameters to optimize, in fixed sequence order.
    params: Vec<Parameter>,
    /// Hyperparameters, fixed at construction.
    options: AdamOptions,
    /// Per-parameter step counts; advance only when a parameter is updated.
    step_counts: Vec<i64>,
    /// First moment estimates (mean of gradients).
    exp_avgs: Vec<Tensor<f64>>,
    /// Second raw moment estimates (uncentered variance of gradients).
    exp_avg_sqs: Vec<Tensor<f64>>,
    /// Running element-wise maxima of `exp_avg_sqs`, for AMSGrad.
    max_exp_avg_sqs: Option<Vec<Tensor<f64>>>,
}

impl Adam {
    /// Creates a new Adam optimizer.
    ///
    /// All state buffers are allocated zero-filled here, one per parameter,
    /// matching each parameter's shape. No gradients are read.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the options are rejected.
    pub fn new(params: Vec<Parameter>, options: AdamOptions) -> Result<Self> {
        options.validate()?;

        let step_counts = vec![0; params.len()];
        let exp_avgs: Vec<Tensor<f64>> = params.iter().map(|p| zeros(&p.shape())).collect();
        let exp_avg_sqs: Vec<Tensor<f64>> = params.iter().map(|p| zeros(&p.shape())).collect();
        let max_exp_avg_sqs = options
            .amsgrad
            .then(|| params.iter().map(|p| zeros(&p.shape())).collect());

        Ok(Self {
            params,
            options,
            step_counts,
            exp_avgs,
            exp_avg_sqs,
            max_exp_avg_sqs,
        })
    }

    /// Creates a new Adam optimizer with the given learning rate and
    /// defaults for everything else.
    pub fn with_learning_rate(params: Vec<Parameter>, learning_rate: f64) -> Result<Self> {
        Self::new(params, AdamOptions::new(learning_rate))
    }

    /// Returns the hyperparameters, read-only.
    #[must_use]
    pub fn options(&self) -> &AdamOptions {
        &self.options
    }

    /// Returns the per-parameter step counts.
    ///
    /// `step_counts()[i]` is the number of steps in which parameter `i`
    /// received a gradient; skipped steps do not advance it.
    #[must_use]
    pub fn step_counts(&self) -> &[i64] {
        &self.step_counts
    }

    /// Captures the optimizer state as a serializable snapshot.
    #[must_use]
    pub fn state_dict(&self) -> AdamStateDict {
        AdamStateDict {
            step_buffers: self.step_counts.clone(),
            exp_average_buffers: self.exp_avgs.iter().map(TensorData::from_tensor).collect(),
            exp_average_sq_buffers: self
                .exp_avg_sqs
                .iter()
                .map(TensorData::from_tensor)
                .collect(),
            max_exp_average_sq_buffers: self
                .max_exp_avg_sqs
                .as_ref()
                .map(|buffers| buffers.iter().map(TensorData::from_tensor).collect()),
        }
    }

    /// Restores optimizer state from a snapshot.
    ///
    /// The snapshot must have been taken from an optimizer over a parameter
    /// sequence of the same length and shapes. Validation is all-or-nothing:
    /// on any mismatch the error is returned with live state untouched.
    /// Restoring into a freshly constructed optimizer is the supported
    /// resumption path; options travel separately from state.
    ///
    /// # Errors
    /// Returns `StateShapeMismatch` if the snapshot is incompatible with
    /// the live parameter sequence.
    pub fn load_state_dict(&mut self, state: &AdamStateDict) -> Result<()> {
        if state.step_buffers.len() != self.params.len() {
            return Err(Error::state_shape_mismatch(format!(
                "step_buffers: expected {} entries, got {}",
                self.params.len(),
                state.step_buffers.len()
            )));
        }

        let exp_avgs = check_buffers("exp_average_buffers", &state.exp_average_buffers, &self.params)?;
        let exp_avg_sqs = check_buffers(
            "exp_average_sq_buffers",
            &state.exp_average_sq_buffers,
            &self.params,
        )?;

        let max_exp_avg_sqs = if self.options.amsgrad {
            let buffers = state.max_exp_average_sq_buffers.as_ref().ok_or_else(|| {
                Error::state_shape_mismatch(
                    "max_exp_average_sq_buffers missing for amsgrad optimizer",
                )
            })?;
            Some(check_buffers(
                "max_exp_average_sq_buffers",
                buffers,
                &self.params,
            )?)
        } else {
            // A non-AMSGrad optimizer has no maximum buffers to restore;
            // any present in the snapshot are ignored.
            None
        };

        self.step_counts.copy_from_slice(&state.step_buffers);
        for (live, new) in self.exp_avgs.iter().zip(exp_avgs.iter()) {
            live.copy_from(new)?;
        }
        for (live, new) in self.exp_avg_sqs.iter().zip(exp_avg_sqs.iter()) {
            live.copy_from(new)?;
        }
        if let (Some(live_buffers), Some(new_buffers)) = (&self.max_exp_avg_sqs, &max_exp_avg_sqs) {
            for (live, new) in live_buffers.iter().zip(new_buffers.iter()) {
                live.copy_from(new)?;
            }
        }

        Ok(())
    }
}

/// Validates one snapshot collection against the live parameter sequence
/// and materializes its tensors. Called before any live state is touched.
fn check_buffers(
    name: &str,
    buffers: &[TensorData],
    params: &[Parameter],
) -> Result<Vec<Tensor<f64>>> {
    if buffers.len() != params.len() {
        return Err(Error::state_shape_mismatch(format!(
            "{name}: expected {} buffers, got {}",
            params.len(),
            buffers.len()
        )));
    }

    buffers
        .iter()
        .zip(params.iter())
        .enumerate()
        .map(|(i, (data, param))| {
            let shape = param.shape();
            if data.shape() != shape.as_slice() || data.numel() != param.numel() {
                return Err(Error::state_shape_mismatch(format!(
                    "{name}[{i}]: buffer shape {:?} does not match parameter shape {:?}",
                    data.shape(),
                    shape
                )));
            }
            data.to_tensor()
        })
        .collect()
}

impl Optimizer for Adam {
    fn step(&mut self) -> Result<()> {
        let AdamOptions {
            learning_rate,
            beta1,
            beta2,
            weight_decay,
            eps,
            ..
        } = self.options;

        for (i, param) in self.params.iter().enumerate() {
            if !param.requires_grad() {
                continue;
            }

            let grad = match param.grad() {
                Some(g) => g,
                None => continue,
            };

            let data = param.data();
            if grad.shape() != data.shape() {
                return Err(Error::shape_mismatch(data.shape(), grad.shape()));
            }

            // L2 penalty goes into a working copy; the caller's gradient
            // tensor is never written.
            let grad = if weight_decay == 0.0 {
                grad
            } else {
                grad.add(&data.mul_scalar(weight_decay))?
            };

            self.step_counts[i] += 1;
            let t = self.step_counts[i];

            let exp_avg = &self.exp_avgs[i];
            let exp_avg_sq = &self.exp_avg_sqs[i];

            // Biased moment estimates, updated in place.
            exp_avg.mul_scalar_(beta1).add_scaled_(&grad, 1.0 - beta1)?;
            exp_avg_sq
                .mul_scalar_(beta2)
                .add_scaled_(&grad.sqr(), 1.0 - beta2)?;

            let bias_correction1 = 1.0 - beta1.powi(t as i32);
            let bias_correction2 = 1.0 - beta2.powi(t as i32);

            let denom = if let Some(max_exp_avg_sqs) = &self.max_exp_avg_sqs {
                let max_exp_avg_sq = &max_exp_avg_sqs[i];
                max_exp_avg_sq.maximum_(exp_avg_sq)?;
                max_exp_avg_sq
                    .div_scalar(bias_correction2)
                    .sqrt()
                    .add_scalar(eps)
            } else {
                exp_avg_sq.div_scalar(bias_correction2).sqrt().add_scalar(eps)
            };

            let step_size = learning_rate / bias_correction1;

            data.sub_scaled_(&exp_avg.div(&denom)?, step_size)?;
        }

        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ferrograd_tensor::randn;

    fn scalar_param(value: f64) -> Parameter {
        Parameter::new(Tensor::from_vec(vec![value], &[1]).unwrap(), true)
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(Adam::with_learning_rate(vec![scalar_param(1.0)], 0.0).is_err());
        assert!(Adam::with_learning_rate(vec![scalar_param(1.0)], -0.1).is_err());
        assert!(Adam::with_learning_rate(vec![scalar_param(1.0)], f64::NAN).is_err());

        let bad_betas = AdamOptions::new(0.001).betas(1.0, 0.999);
        assert!(Adam::new(vec![scalar_param(1.0)], bad_betas).is_err());

        let bad_eps = AdamOptions::new(0.001).eps(0.0);
        assert!(Adam::new(vec![scalar_param(1.0)], bad_eps).is_err());

        let bad_decay = AdamOptions::new(0.001).weight_decay(-1.0);
        assert!(Adam::new(vec![scalar_param(1.0)], bad_decay).is_err());
    }

    #[test]
    fn test_options_are_read_only_defaults() {
        let optimizer = Adam::with_learning_rate(vec![scalar_param(1.0)], 0.001).unwrap();
        let options = optimizer.options();

        assert_eq!(options.learning_rate, 0.001);
        assert_eq!(options.beta1, 0.9);
        assert_eq!(options.beta2, 0.999);
        assert_eq!(options.weight_decay, 0.0);
        assert_eq!(options.eps, 1e-8);
        assert!(!options.amsgrad);
    }

    #[test]
    fn test_state_allocated_at_construction() {
        let params = vec![
            Parameter::new(randn(&[2, 3]), true),
            Parameter::new(randn(&[4]), true),
        ];
        let optimizer = Adam::new(params, AdamOptions::new(0.01).amsgrad(true)).unwrap();

        assert_eq!(optimizer.num_parameters(), 2);
        assert_eq!(optimizer.step_counts(), &[0, 0]);

        let state = optimizer.state_dict();
        assert_eq!(state.exp_average_buffers.len(), 2);
        assert_eq!(state.exp_average_buffers[0].shape(), &[2, 3]);
        assert_eq!(state.exp_average_sq_buffers[1].shape(), &[4]);
        assert!(state.exp_average_buffers[0].values.iter().all(|&v| v == 0.0));

        let max_buffers = state.max_exp_average_sq_buffers.as_ref().unwrap();
        assert_eq!(max_buffers.len(), 2);

        let plain = Adam::with_learning_rate(vec![scalar_param(1.0)], 0.01).unwrap();
        assert!(plain.state_dict().max_exp_average_sq_buffers.is_none());
    }

    #[test]
    fn test_concrete_first_step() {
        let param = scalar_param(1.0);
        param.set_grad(Tensor::from_vec(vec![0.1], &[1]).unwrap());

        let mut optimizer = Adam::with_learning_rate(vec![param.clone()], 0.001).unwrap();
        optimizer.step().unwrap();

        let state = optimizer.state_dict();
        let exp_avg = state.exp_average_buffers[0].values[0];
        let exp_avg_sq = state.exp_average_sq_buffers[0].values[0];

        assert!((exp_avg - 0.01).abs() < 1e-12);
        assert!((exp_avg_sq - 1e-5).abs() < 1e-12);

        // Same arithmetic as the update rule, spelled out.
        let step_size = 0.001 / (1.0 - 0.9);
        let denom = (exp_avg_sq / (1.0 - 0.999)).sqrt() + 1e-8;
        let expected = 1.0 - step_size * (exp_avg / denom);

        let value = param.data().item().unwrap();
        assert_eq!(value, expected);
        assert!((value - 0.999).abs() < 1e-6);
    }

    #[test]
    fn test_zero_gradient_is_a_fixpoint() {
        let param = Parameter::new(Tensor::from_vec(vec![1.5, -2.5], &[2]).unwrap(), true);
        param.set_grad(Tensor::zeros(&[2]));

        let mut optimizer = Adam::with_learning_rate(vec![param.clone()], 0.01).unwrap();
        for _ in 0..100 {
            optimizer.step().unwrap();
        }

        // Moments stay at zero, so the update term is exactly zero.
        assert_eq!(param.data().to_vec(), vec![1.5, -2.5]);
        assert_eq!(optimizer.step_counts(), &[100]);
    }

    #[test]
    fn test_parameters_without_gradient_are_skipped() {
        let with_grad = scalar_param(1.0);
        let without_grad = scalar_param(2.0);
        with_grad.set_grad(Tensor::from_vec(vec![0.5], &[1]).unwrap());

        let mut optimizer =
            Adam::with_learning_rate(vec![with_grad.clone(), without_grad.clone()], 0.01).unwrap();
        optimizer.step().unwrap();

        assert_eq!(optimizer.step_counts(), &[1, 0]);
        assert_eq!(without_grad.data().item().unwrap(), 2.0);
        assert_ne!(with_grad.data().item().unwrap(), 1.0);

        without_grad.set_grad(Tensor::from_vec(vec![0.5], &[1]).unwrap());
        optimizer.step().unwrap();
        assert_eq!(optimizer.step_counts(), &[2, 1]);
    }

    #[test]
    fn test_frozen_parameters_are_skipped() {
        let frozen = Parameter::new(Tensor::from_vec(vec![3.0], &[1]).unwrap(), false);
        frozen.set_grad(Tensor::from_vec(vec![1.0], &[1]).unwrap());

        let mut optimizer = Adam::with_learning_rate(vec![frozen.clone()], 0.01).unwrap();
        optimizer.step().unwrap();

        assert_eq!(frozen.data().item().unwrap(), 3.0);
        assert_eq!(optimizer.step_counts(), &[0]);
    }

    #[test]
    fn test_caller_gradient_is_not_mutated_by_weight_decay() {
        let param = scalar_param(2.0);
        let grad = Tensor::from_vec(vec![0.3], &[1]).unwrap();
        param.set_grad(grad.clone());

        let options = AdamOptions::new(0.01).weight_decay(0.5);
        let mut optimizer = Adam::new(vec![param], options).unwrap();
        optimizer.step().unwrap();

        assert_eq!(grad.to_vec(), vec![0.3]);
    }

    #[test]
    fn test_weight_decay_equivalence() {
        let decay = 0.1;
        let initial = vec![1.0, -0.5, 2.0];

        let param_a = Parameter::new(Tensor::from_vec(initial.clone(), &[3]).unwrap(), true);
        let param_b = Parameter::new(Tensor::from_vec(initial, &[3]).unwrap(), true);

        let mut optimizer_a =
            Adam::new(vec![param_a.clone()], AdamOptions::new(0.01).weight_decay(decay)).unwrap();
        let mut optimizer_b = Adam::with_learning_rate(vec![param_b.clone()], 0.01).unwrap();

        for _ in 0..3 {
            let raw = randn::<f64>(&[3]);

            param_a.set_grad(raw.deep_clone());
            // Pre-adjusted gradient: g + decay * p must match weight decay.
            let adjusted = raw.add(&param_b.data().mul_scalar(decay)).unwrap();
            param_b.set_grad(adjusted);

            optimizer_a.step().unwrap();
            optimizer_b.step().unwrap();

            assert_eq!(param_a.data().to_vec(), param_b.data().to_vec());
        }

        assert_eq!(
            optimizer_a.state_dict().exp_average_buffers,
            optimizer_b.state_dict().exp_average_buffers
        );
    }

    #[test]
    fn test_amsgrad_max_is_nondecreasing() {
        let param = Parameter::new(randn(&[4]), true);
        let options = AdamOptions::new(0.01).amsgrad(true);
        let mut optimizer = Adam::new(vec![param.clone()], options).unwrap();

        let mut previous: Option<Vec<f64>> = None;
        for step in 0..50 {
            // Shrinking gradients, so the running maximum must plateau
            // rather than follow the decaying second moment down.
            let scale = 1.0 / f64::from(step + 1);
            param.set_grad(randn::<f64>(&[4]).mul_scalar(scale));
            optimizer.step().unwrap();

            let state = optimizer.state_dict();
            let current = state.max_exp_average_sq_buffers.unwrap()[0].values.clone();
            if let Some(prev) = &previous {
                for (c, p) in current.iter().zip(prev.iter()) {
                    assert!(c >= p);
                }
            }
            previous = Some(current);
        }
    }

    #[test]
    fn test_bias_correction_convergence() {
        let param = scalar_param(0.0);
        param.set_grad(Tensor::from_vec(vec![1.0], &[1]).unwrap());

        let learning_rate = 0.001;
        let mut optimizer =
            Adam::with_learning_rate(vec![param.clone()], learning_rate).unwrap();

        let mut before_last = 0.0;
        for step in 0..10_000 {
            if step == 9_999 {
                before_last = param.data().item().unwrap();
            }
            optimizer.step().unwrap();
        }

        // With a constant unit gradient the first moment converges to the
        // gradient itself...
        let state = optimizer.state_dict();
        let exp_avg = state.exp_average_buffers[0].values[0];
        assert!((exp_avg - 1.0).abs() < 1e-9);

        // ...and the per-step movement converges to the learning rate,
        // bounded below by eps in the denominator.
        let delta = before_last - param.data().item().unwrap();
        assert!((delta - learning_rate).abs() < 1e-9);
    }

    #[test]
    fn test_shape_mismatch_keeps_prior_updates() {
        let good = Parameter::new(Tensor::from_vec(vec![1.0, 1.0], &[2]).unwrap(), true);
        let bad = Parameter::new(Tensor::from_vec(vec![1.0, 1.0, 1.0], &[3]).unwrap(), true);

        good.set_grad(Tensor::from_vec(vec![0.5, 0.5], &[2]).unwrap());
        bad.set_grad(Tensor::from_vec(vec![0.5, 0.5], &[2]).unwrap()); // wrong shape

        let mut optimizer =
            Adam::with_learning_rate(vec![good.clone(), bad.clone()], 0.01).unwrap();
        let err = optimizer.step().unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));

        // The first parameter was already updated when the mismatch was hit;
        // the offending parameter saw no state mutation at all.
        assert_ne!(good.data().to_vec(), vec![1.0, 1.0]);
        assert_eq!(bad.data().to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(optimizer.step_counts(), &[1, 0]);
    }

    #[test]
    fn test_state_dict_round_trip_resumes_identically() {
        let shapes: [&[usize]; 2] = [&[2, 2], &[3]];
        let options = AdamOptions::new(0.005).weight_decay(0.01).amsgrad(true);

        let params_a: Vec<Parameter> =
            shapes.iter().map(|s| Parameter::new(randn(s), true)).collect();
        let mut optimizer_a = Adam::new(params_a.clone(), options.clone()).unwrap();

        for _ in 0..5 {
            for (param, shape) in params_a.iter().zip(shapes.iter()) {
                param.set_grad(randn(shape));
            }
            optimizer_a.step().unwrap();
        }

        // Serialize through the wire format, not just a clone.
        let bytes = bincode::serialize(&optimizer_a.state_dict()).unwrap();
        let restored: AdamStateDict = bincode::deserialize(&bytes).unwrap();

        // Optimizer B starts from freshly constructed (empty) state over the
        // same parameter values, then adopts A's state.
        let params_b: Vec<Parameter> = params_a
            .iter()
            .map(|p| Parameter::new(p.data().deep_clone(), true))
            .collect();
        let mut optimizer_b = Adam::new(params_b.clone(), options).unwrap();
        optimizer_b.load_state_dict(&restored).unwrap();

        assert_eq!(optimizer_b.state_dict(), optimizer_a.state_dict());

        // One more identical step on both must produce identical results.
        for (param, shape) in params_a.iter().zip(shapes.iter()) {
            param.set_grad(Tensor::full(shape, 0.25));
        }
        for (param, shape) in params_b.iter().zip(shapes.iter()) {
            param.set_grad(Tensor::full(shape, 0.25));
        }
        optimizer_a.step().unwrap();
        optimizer_b.step().unwrap();

        for (a, b) in params_a.iter().zip(params_b.iter()) {
            assert_eq!(a.data().to_vec(), b.data().to_vec());
        }
        assert_eq!(optimizer_a.state_dict(), optimizer_b.state_dict());
    }

    #[test]
    fn test_load_state_dict_rejects_mismatches() {
        let params = vec![Parameter::new(randn(&[2, 2]), true)];
        let mut optimizer =
            Adam::new(params, AdamOptions::new(0.01).amsgrad(true)).unwrap();
        let pristine = optimizer.state_dict();

        // Wrong parameter count.
        let other = Adam::new(
            vec![
                Parameter::new(randn(&[2, 2]), true),
                Parameter::new(randn(&[2]), true),
            ],
            AdamOptions::new(0.01).amsgrad(true),
        )
        .unwrap();
        let err = optimizer.load_state_dict(&other.state_dict()).unwrap_err();
        assert!(matches!(err, Error::StateShapeMismatch { .. }));

        // Wrong buffer shape.
        let other = Adam::new(
            vec![Parameter::new(randn(&[4]), true)],
            AdamOptions::new(0.01).amsgrad(true),
        )
        .unwrap();
        let err = optimizer.load_state_dict(&other.state_dict()).unwrap_err();
        assert!(matches!(err, Error::StateShapeMismatch { .. }));

        // Missing maximum buffers for an amsgrad optimizer.
        let mut truncated = pristine.clone();
        truncated.max_exp_average_sq_buffers = None;
        let err = optimizer.load_state_dict(&truncated).unwrap_err();
        assert!(matches!(err, Error::StateShapeMismatch { .. }));

        // Every rejected restore left live state untouched.
        assert_eq!(optimizer.state_dict(), pristine);
    }

    #[test]
    fn test_zero_grad_clears_gradients_in_place() {
        let param = scalar_param(1.0);
        param.set_grad(Tensor::from_vec(vec![0.7], &[1]).unwrap());

        let mut optimizer = Adam::with_learning_rate(vec![param.clone()], 0.01).unwrap();
        optimizer.zero_grad();

        assert_eq!(param.grad().unwrap().to_vec(), vec![0.0]);
    }
}
