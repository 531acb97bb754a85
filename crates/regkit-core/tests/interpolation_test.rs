use regkit_core::image::{Image, PixelBuffer};
use regkit_core::interpolation::{
    AdvancedLinearInterpolator, DerivativeInterpolator, Interpolator, LinearInterpolator,
};
use regkit_core::spatial::{Direction, Point, Spacing};
use regkit_core::{CoreError, Vector};
use burn::tensor::Tensor;
use burn_ndarray::NdArray;
use nalgebra::SVector;

type Backend = NdArray<f32>;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

#[test]
fn test_ramp_2d_gradient_with_spacing() {
    // f(x, y) = 2x + 3y on a 5x4 grid with anisotropic spacing.
    let spacing = Spacing::new([0.5, 2.0]);
    let image = PixelBuffer::from_fn([5, 4], spacing, |[x, y]| 2.0 * x as f64 + 3.0 * y as f64).unwrap();
    let interpolator = AdvancedLinearInterpolator::new(&image);

    for p in [[0.0, 0.0], [1.25, 2.5], [3.9, 0.1], [4.0, 3.0], [2.0, 1.0]] {
        let (value, gradient) = interpolator
            .evaluate_value_and_derivative_at_continuous_index(&Point::new(p))
            .unwrap();
        assert_close(value, 2.0 * p[0] + 3.0 * p[1], "value");
        assert_close(gradient[0], 2.0 / 0.5, "d/dx");
        assert_close(gradient[1], 3.0 / 2.0, "d/dy");
    }
}

#[test]
fn test_ramp_3d_gradient_with_spacing() {
    // f(x, y, z) = x - 2y + 4z
    let spacing = Spacing::new([1.0, 0.25, 2.0]);
    let image = PixelBuffer::from_fn([4, 3, 5], spacing, |[x, y, z]| {
        x as f64 - 2.0 * y as f64 + 4.0 * z as f64
    })
    .unwrap();
    let interpolator = AdvancedLinearInterpolator::new(&image);

    let x = Point::new([2.5, 0.75, 3.2]);
    let (value, gradient) = interpolator
        .evaluate_value_and_derivative_at_continuous_index(&x)
        .unwrap();
    assert_close(value, 2.5 - 1.5 + 12.8, "value");

    let gradient: Vector<3> = gradient.into();
    assert_close(gradient[0], 1.0, "d/dx");
    assert_close(gradient[1], -8.0, "d/dy");
    assert_close(gradient[2], 2.0, "d/dz");

    let derivative_only = interpolator.evaluate_derivative_at_continuous_index(&x).unwrap();
    assert_eq!(Vector::from(derivative_only), gradient);
}

#[test]
fn test_mirrored_boundary_differs_from_clamp() {
    // f(x, y) = x * x + y along a 5x3 grid.
    let image = PixelBuffer::from_fn([5, 3], Spacing::uniform(1.0), |[x, y]| (x * x) as f64 + y as f64).unwrap();
    let advanced = AdvancedLinearInterpolator::new(&image);
    let clamped = LinearInterpolator::new(&image);

    // One sample before index 0 reads index 1.
    let before = Point::new([-1.0, 0.0]);
    let (value, gradient) = advanced
        .evaluate_value_and_derivative_at_continuous_index(&before)
        .unwrap();
    assert_close(value, 1.0, "mirrored value at -1");
    assert_close(clamped.evaluate_at_continuous_index(&before), 0.0, "clamped value at -1");
    // Cell [1, 2] has slope 3; the reflection flips it.
    assert_close(gradient[0], -3.0, "mirrored slope at -1");

    // One sample past the last index reads index size - 2.
    let after = Point::new([5.0, 1.0]);
    let (value, _) = advanced
        .evaluate_value_and_derivative_at_continuous_index(&after)
        .unwrap();
    assert_close(value, 9.0 + 1.0, "mirrored value at size");
    assert_close(clamped.evaluate_at_continuous_index(&after), 16.0 + 1.0, "clamped value at size");

    // Same along y: -1 reads row 1.
    let below = Point::new([2.0, -1.0]);
    let (value, gradient) = advanced
        .evaluate_value_and_derivative_at_continuous_index(&below)
        .unwrap();
    assert_close(value, 4.0 + 1.0, "mirrored value at y = -1");
    assert_close(clamped.evaluate_at_continuous_index(&below), 4.0, "clamped value at y = -1");
    assert_close(gradient[1], -1.0, "mirrored slope at y = -1");

    // Value-only calls keep the clamped boundary.
    assert_close(advanced.evaluate_at_continuous_index(&before), 0.0, "value-only at -1");
}

#[test]
fn test_mirrored_boundary_3d_every_axis() {
    // f(x, y, z) = x^2 + 10 y^2 + 100 z^2 on a 3x4x5 grid; every axis has
    // distinct values at index 0 and index 1, and a slope that changes per cell.
    let image = PixelBuffer::from_fn([3, 4, 5], Spacing::uniform(1.0), |[x, y, z]| {
        (x * x + 10 * y * y + 100 * z * z) as f64
    })
    .unwrap();
    let advanced = AdvancedLinearInterpolator::new(&image);
    let clamped = LinearInterpolator::new(&image);

    // x = -1 reads x = 1, y = size reads y = 2, z = -0.5 reads z = 0.5.
    let probe = Point::new([-1.0, 4.0, -0.5]);
    let (value, gradient) = advanced
        .evaluate_value_and_derivative_at_continuous_index(&probe)
        .unwrap();
    assert_close(value, 1.0 + 40.0 + 50.0, "mirrored value");
    assert_close(clamped.evaluate_at_continuous_index(&probe), 0.0 + 90.0 + 0.0, "clamped value");

    // Slopes of cells x [1, 2], y [2, 3] and z [0, 1], each reflected once.
    assert_close(gradient[0], -3.0, "d/dx");
    assert_close(gradient[1], -50.0, "d/dy");
    assert_close(gradient[2], -100.0, "d/dz");

    // The same point reached without reflection keeps positive slopes.
    let (inside_value, inside_gradient) = advanced
        .evaluate_value_and_derivative_at_continuous_index(&Point::new([1.0, 2.0, 0.5]))
        .unwrap();
    assert_close(inside_value, value, "interior value");
    for axis in 0..3 {
        assert_close(inside_gradient[axis], -gradient[axis], "interior slope");
    }
}

#[test]
fn test_mirrored_boundary_3d_vector_pixels() {
    // Only reflected axes flip their slope; z stays inside.
    let image = PixelBuffer::from_fn([3, 3, 3], Spacing::uniform(1.0), |[x, y, z]| {
        SVector::<f64, 2>::new(x as f64 + 0.5 * y as f64, 2.0 * z as f64)
    })
    .unwrap();
    let interpolator = AdvancedLinearInterpolator::new(&image);

    let (value, gradient) = interpolator
        .evaluate_value_and_derivative_at_continuous_index(&Point::new([-0.5, 2.5, 1.2]))
        .unwrap();
    // x -> 0.5, y -> 1.5
    assert!((value - SVector::<f64, 2>::new(0.5 + 0.75, 2.4)).norm() < 1e-9);
    assert!((gradient[0] - SVector::<f64, 2>::new(-1.0, 0.0)).norm() < 1e-9);
    assert!((gradient[1] - SVector::<f64, 2>::new(-0.5, 0.0)).norm() < 1e-9);
    assert!((gradient[2] - SVector::<f64, 2>::new(0.0, 2.0)).norm() < 1e-9);
}

#[test]
fn test_inside_buffer_bounds() {
    let image = PixelBuffer::from_fn([3, 3], Spacing::uniform(1.0), |_| 1.0).unwrap();
    let interpolator = LinearInterpolator::new(&image);
    assert!(interpolator.is_inside_buffer(&Point::new([-0.5, 2.5])));
    assert!(!interpolator.is_inside_buffer(&Point::new([-0.51, 1.0])));
    assert!(!interpolator.is_inside_buffer(&Point::new([1.0, 2.6])));
}

#[test]
fn test_four_dimensional_derivatives_are_unsupported() {
    let image = PixelBuffer::from_fn([2, 2, 2, 2], Spacing::uniform(1.0), |[x, y, z, t]| {
        (x + y + z + t) as f64
    })
    .unwrap();
    let interpolator = AdvancedLinearInterpolator::new(&image);
    let x = Point::new([0.5, 0.5, 0.5, 0.5]);

    let err = interpolator
        .evaluate_value_and_derivative_at_continuous_index(&x)
        .unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedDimensionality { dimension: 4, .. }));
    assert!(err.to_string().contains("(4)"));

    assert!(matches!(
        interpolator.evaluate_derivative_at_continuous_index(&x),
        Err(CoreError::UnsupportedDimensionality { .. })
    ));
    assert_close(interpolator.evaluate_at_continuous_index(&x), 2.0, "value-only 4D");
}

#[test]
fn test_tensor_image_to_physical_gradient() {
    let device = Default::default();
    // Tensor layout is [Y, X]; f(x, y) = 2x + 3y.
    let data = Tensor::<Backend, 2>::from_floats(
        [[0.0, 2.0, 4.0, 6.0], [3.0, 5.0, 7.0, 9.0], [6.0, 8.0, 10.0, 12.0]],
        &device,
    );
    let image = Image::new(
        data,
        Point::new([10.0, 20.0]),
        Spacing::uniform(0.5),
        Direction::identity(),
    );
    let buffer = image.to_pixel_buffer().unwrap();
    let interpolator = AdvancedLinearInterpolator::new(&buffer);

    let index = image
        .transform_physical_point_to_continuous_index(&Point::new([10.75, 20.25]))
        .unwrap();
    assert_close(index[0], 1.5, "index x");
    assert_close(index[1], 0.5, "index y");

    let (value, gradient) = interpolator
        .evaluate_value_and_derivative_at_continuous_index(&index)
        .unwrap();
    assert_close(value, 4.5, "value");
    assert_close(gradient[0], 4.0, "d/dx");
    assert_close(gradient[1], 6.0, "d/dy");
}
