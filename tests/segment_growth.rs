use approx::assert_relative_eq;
use vicar::grid::{find_n_growth_rate, prime_factors, SmoothOptions};
use vicar::{connect_segs, Error, Segment};

#[test]
fn growth_reaches_the_boundary_exactly() {
    let core = Segment::uniform_dx(0.0, 10.0, 1.0);
    let buffer = core.grow_toward_right(20.0, 1.1).unwrap();

    assert_eq!(buffer.start(), 10.0);
    assert_eq!(buffer.end(), 20.0);
    assert!(buffer.is_strictly_increasing());
    assert_relative_eq!(buffer.start_dx(), 1.0, epsilon = 1e-12);

    // every cell is wider than the one before it
    let grid = buffer.grid();
    for i in 1..buffer.npoint() - 1 {
        assert!(grid[i + 1] - grid[i] > grid[i] - grid[i - 1]);
    }

    let axis = connect_segs(&[core.clone(), buffer.clone()]);
    assert_eq!(axis.npoint(), core.npoint() + buffer.npoint() - 1);
    assert!(axis.is_strictly_increasing());
}

#[test]
fn growth_toward_left_mirrors_right() {
    let core = Segment::uniform_dx(10.0, 20.0, 0.5);
    let left = core.grow_toward_left(0.0, 1.2).unwrap();

    assert_eq!(left.start(), 0.0);
    assert_eq!(left.end(), 10.0);
    assert_relative_eq!(left.end_dx(), 0.5, epsilon = 1e-12);
    assert!(left.is_strictly_increasing());
}

#[test]
fn growth_rate_sums_to_length() {
    let (n, q) = find_n_growth_rate(1.0, 10.0, 1.1).unwrap();
    assert_eq!(n, 8);

    let total: f64 = (0..n).map(|i| q.powi(i as i32)).sum();
    assert_relative_eq!(total, 10.0, epsilon = 1e-5);
}

#[test]
fn growth_needs_room() {
    let core = Segment::uniform_dx(0.0, 1.0, 0.1);
    assert!(matches!(
        core.grow_toward_left(0.0, 1.1),
        Err(Error::Growth(_))
    ));
    assert!(matches!(
        core.grow_toward_right(0.5, 1.1),
        Err(Error::Growth(_))
    ));
}

#[test]
fn smoothing_keeps_ends_and_order() {
    let mut seg = Segment::from(vec![0.0, 0.1, 0.5, 0.6, 2.0, 2.2]);
    seg.smooth(None, None, SmoothOptions::iterations(20));

    assert_eq!(seg.start(), 0.0);
    assert_eq!(seg.end(), 2.2);
    assert!(seg.is_strictly_increasing());
}

#[test]
fn stretched_axis_resamples_to_smooth_cell_count() {
    let core = Segment::uniform_dx(4.0, 6.0, 0.1);
    let mut left = core.grow_toward_left(0.0, 1.05).unwrap();
    let mut right = core.grow_toward_right(20.0, 1.05).unwrap();

    let (outer, inner) = (left.lslope(), core.lslope());
    left.smooth(Some(outer), Some(inner), SmoothOptions::iterations(10));
    let (inner, outer) = (core.rslope(), right.rslope());
    right.smooth(Some(inner), Some(outer), SmoothOptions::iterations(10));

    let axis = (left + core) + right;
    let resampled = axis.resample_prime_comb(&[2, 3]);

    assert!(resampled.npoint() >= axis.npoint());
    assert_eq!(resampled.end(), 20.0);
    assert!(resampled.is_strictly_increasing());

    let cells = resampled.npoint() - 1;
    assert!(prime_factors(cells).iter().all(|(p, _)| [2, 3].contains(p)));
}

#[test]
fn single_cell_growth() {
    // the remaining length fits in one step of the boundary spacing
    let core = Segment::uniform_dx(9.5, 10.0, 0.5);
    let buffer = core.grow_toward_right(10.4, 1.1).unwrap();
    assert_eq!(buffer.grid().to_vec(), vec![10.0, 10.4]);

    let (n, _) = find_n_growth_rate(0.5, 0.4, 1.1).unwrap();
    assert_eq!(n, 1);

    let left = Segment::uniform_dx(0.5, 1.0, 0.5)
        .grow_toward_left(0.2, 1.1)
        .unwrap();
    assert_eq!(left.grid().to_vec(), vec![0.2, 0.5]);
}

#[test]
fn growth_from_a_single_point() {
    let core = Segment::uniform_dx(4.0, 4.05, 0.1);
    assert_eq!(core.npoint(), 1);

    assert!(matches!(
        core.grow_toward_left(0.0, 1.05),
        Err(Error::ShortSegment(1))
    ));
    assert!(matches!(
        core.grow_toward_right(20.0, 1.05),
        Err(Error::ShortSegment(1))
    ));
}
