use super::*;
use crate::rules::{generate, RuleKind, RuleParams};

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// ∫ x^p y^q over the unit triangle.
fn tri_moment(p: usize, q: usize) -> f64 {
    factorial(p) * factorial(q) / factorial(p + q + 2)
}

/// ∫ x^p y^q z^r over the unit tetrahedron.
fn tet_moment(p: usize, q: usize, r: usize) -> f64 {
    factorial(p) * factorial(q) * factorial(r) / factorial(p + q + r + 3)
}

fn cube_moment(p: usize) -> f64 {
    if p % 2 == 1 {
        0.0
    } else {
        2.0 / (p as f64 + 1.0)
    }
}

fn max_abs_diff(a: &PointSet, b: &PointSet) -> f64 {
    assert_eq!(a.npts(), b.npts());
    a.iter()
        .zip(b.iter())
        .flat_map(|(p, q)| {
            p.x()
                .iter()
                .zip(q.x())
                .map(|(u, v)| (u - v).abs())
                .chain(std::iter::once((p.w() - q.w()).abs()))
        })
        .fold(0.0, f64::max)
}

#[test]
fn every_listed_set_is_present_and_well_formed() {
    let t = LegacyTable::load().unwrap();
    let mut n = 0;
    for domain in Domain::ALL {
        for &npts in domain.counts() {
            let s = t.lookup(domain, npts).unwrap();
            assert_eq!(s.rule(), domain.tag());
            assert_eq!(s.ndim(), domain.ndim());
            assert_eq!(s.points().len(), npts);
            assert!(s.iter().all(|p| p.x().len() == domain.ndim()));
            n += 1;
        }
    }
    assert_eq!(t.keys().count(), n);
    assert_eq!(n, 18);
}

#[test]
fn weight_sums_match_domain_measure() {
    let t = LegacyTable::load().unwrap();
    let measure = |d: Domain| match d {
        Domain::Lin => 2.0,
        Domain::Qua => 4.0,
        Domain::Hex => 8.0,
        Domain::Tri => 0.5,
        Domain::Tet => 1.0 / 6.0,
    };
    for (domain, npts) in t.keys() {
        let expected = if (domain, npts) == (Domain::Tet, 6) {
            8.0
        } else {
            measure(domain)
        };
        let sum = t.lookup(domain, npts).unwrap().weight_sum();
        assert!(
            (sum - expected).abs() < 1e-12,
            "{domain}/{npts}: {sum} vs {expected}"
        );
    }
}

#[test]
fn tensor_tables_agree_with_generated_rules() {
    let t = LegacyTable::load().unwrap();
    let none = RuleParams::default();
    for n in 1..=5 {
        let gen = generate(RuleKind::Le, 1, n, &none).unwrap();
        let tab = t.lookup(Domain::Lin, n).unwrap();
        assert!(max_abs_diff(&gen, tab) < 1e-13, "lin/{n}");
    }
    for n in [4, 9] {
        let gen = generate(RuleKind::Le, 2, n, &none).unwrap();
        assert!(max_abs_diff(&gen, t.lookup(Domain::Qua, n).unwrap()) < 1e-13);
    }
    let gen = generate(RuleKind::Le, 3, 8, &none).unwrap();
    assert!(max_abs_diff(&gen, t.lookup(Domain::Hex, 8).unwrap()) < 1e-13);
    let gen = generate(RuleKind::Le, 3, 27, &none).unwrap();
    assert!(max_abs_diff(&gen, t.lookup(Domain::Hex, 27).unwrap()) < 1e-12);
}

#[test]
fn hex14_is_degree_five() {
    let t = LegacyTable::load().unwrap();
    let s = t.lookup(Domain::Hex, 14).unwrap();
    for p in 0..=5usize {
        for q in 0..=(5 - p) {
            for r in 0..=(5 - p - q) {
                let approx = s.integrate(|x| {
                    x[0].powi(p as i32) * x[1].powi(q as i32) * x[2].powi(r as i32)
                });
                let exact = cube_moment(p) * cube_moment(q) * cube_moment(r);
                assert!((approx - exact).abs() < 1e-12, "x^{p} y^{q} z^{r}");
            }
        }
    }
}

#[test]
fn triangle_rules_reach_their_degree() {
    let t = LegacyTable::load().unwrap();
    for (npts, deg, tol) in [(1, 1, 1e-15), (3, 2, 1e-15), (12, 6, 1e-9), (16, 6, 1e-9)] {
        let s = t.lookup(Domain::Tri, npts).unwrap();
        for p in 0..=deg {
            for q in 0..=(deg - p) {
                let approx = s.integrate(|x| x[0].powi(p as i32) * x[1].powi(q as i32));
                assert!(
                    (approx - tri_moment(p, q)).abs() < tol,
                    "tri/{npts} x^{p} y^{q}: {approx}"
                );
            }
        }
    }
}

#[test]
fn tetrahedron_rules_reach_their_degree() {
    let t = LegacyTable::load().unwrap();
    for (npts, deg) in [(1, 1), (4, 2), (5, 3)] {
        let s = t.lookup(Domain::Tet, npts).unwrap();
        for p in 0..=deg {
            for q in 0..=(deg - p) {
                for r in 0..=(deg - p - q) {
                    let approx = s.integrate(|x| {
                        x[0].powi(p as i32) * x[1].powi(q as i32) * x[2].powi(r as i32)
                    });
                    assert!(
                        (approx - tet_moment(p, q, r)).abs() < 1e-13,
                        "tet/{npts} x^{p} y^{q} z^{r}: {approx}"
                    );
                }
            }
        }
    }
}

#[test]
fn lookup_by_tag() {
    let t = LegacyTable::load().unwrap();
    let tri3 = t.lookup_tag("tri", 3).unwrap();
    assert_eq!(tri3.points()[1].x(), &[2.0 / 3.0, 1.0 / 6.0]);
    assert!(t.lookup_tag("tri", 7).is_none());
    assert!(t.lookup_tag("pyr", 5).is_none());
    assert_eq!(
        "pyr".parse::<Domain>().unwrap_err(),
        QuadError::UnknownDomain("pyr".into())
    );
    for d in Domain::ALL {
        assert_eq!(d.tag().parse::<Domain>().unwrap(), d);
    }
    // repeated lookups hand out the same stored set
    assert!(std::ptr::eq(
        t.lookup(Domain::Hex, 14).unwrap(),
        t.lookup(Domain::Hex, 14).unwrap()
    ));
}
