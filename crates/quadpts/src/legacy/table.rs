//! Published point tables, rows `[r, s, t, weight]`.
//!
//! Values are transcribed as printed; unused trailing coordinates are zero.

type Row = [f64; 4];

pub(super) fn lin(npts: usize) -> Option<Vec<Row>> {
    let rows = match npts {
        1 => vec![[0.0, 0.0, 0.0, 2.0]],
        2 => vec![
            [-0.5773502691896257, 0.0, 0.0, 1.0],
            [0.5773502691896257, 0.0, 0.0, 1.0],
        ],
        3 => vec![
            [-0.7745966692414834, 0.0, 0.0, 0.5555555555555556],
            [0.0000000000000000, 0.0, 0.0, 0.8888888888888888],
            [0.7745966692414834, 0.0, 0.0, 0.5555555555555556],
        ],
        4 => vec![
            [-0.8611363115940526, 0.0, 0.0, 0.3478548451374538],
            [-0.3399810435848562, 0.0, 0.0, 0.6521451548625462],
            [0.3399810435848562, 0.0, 0.0, 0.6521451548625462],
            [0.8611363115940526, 0.0, 0.0, 0.3478548451374538],
        ],
        5 => vec![
            [-0.9061798459386640, 0.0, 0.0, 0.2369268850561891],
            [-0.5384693101056831, 0.0, 0.0, 0.4786286704993665],
            [0.0000000000000000, 0.0, 0.0, 0.5688888888888889],
            [0.5384693101056831, 0.0, 0.0, 0.4786286704993665],
            [0.9061798459386640, 0.0, 0.0, 0.2369268850561891],
        ],
        _ => return None,
    };
    Some(rows)
}

pub(super) fn qua(npts: usize) -> Option<Vec<Row>> {
    const G2: f64 = 0.5773502691896257;
    const G3: f64 = 0.7745966692414834;
    let rows = match npts {
        4 => vec![
            [-G2, -G2, 0.0, 1.0],
            [G2, -G2, 0.0, 1.0],
            [-G2, G2, 0.0, 1.0],
            [G2, G2, 0.0, 1.0],
        ],
        9 => vec![
            [-G3, -G3, 0.0, 25.0 / 81.0],
            [0.0, -G3, 0.0, 40.0 / 81.0],
            [G3, -G3, 0.0, 25.0 / 81.0],
            [-G3, 0.0, 0.0, 40.0 / 81.0],
            [0.0, 0.0, 0.0, 64.0 / 81.0],
            [G3, 0.0, 0.0, 40.0 / 81.0],
            [-G3, G3, 0.0, 25.0 / 81.0],
            [0.0, G3, 0.0, 40.0 / 81.0],
            [G3, G3, 0.0, 25.0 / 81.0],
        ],
        _ => return None,
    };
    Some(rows)
}

pub(super) fn hex(npts: usize) -> Option<Vec<Row>> {
    const G2: f64 = 0.5773502691896257;
    // 27-point table is printed with 15 digits
    const G3: f64 = 0.774596669241483;
    const W_CORNER: f64 = 0.171467764060357;
    const W_EDGE: f64 = 0.274348422496571;
    const W_FACE: f64 = 0.438957475994513;
    const W_CENTER: f64 = 0.702331961591221;
    let rows = match npts {
        8 => vec![
            [-G2, -G2, -G2, 1.0],
            [G2, -G2, -G2, 1.0],
            [-G2, G2, -G2, 1.0],
            [G2, G2, -G2, 1.0],
            [-G2, -G2, G2, 1.0],
            [G2, -G2, G2, 1.0],
            [-G2, G2, G2, 1.0],
            [G2, G2, G2, 1.0],
        ],
        14 => {
            let a = (19.0 / 30.0_f64).sqrt();
            let b = (19.0 / 33.0_f64).sqrt();
            let wa = 320.0 / 361.0;
            let wb = 121.0 / 361.0;
            vec![
                [a, 0.0, 0.0, wa],
                [-a, 0.0, 0.0, wa],
                [0.0, a, 0.0, wa],
                [0.0, -a, 0.0, wa],
                [0.0, 0.0, a, wa],
                [0.0, 0.0, -a, wa],
                [b, b, b, wb],
                [-b, b, b, wb],
                [b, -b, b, wb],
                [-b, -b, b, wb],
                [b, b, -b, wb],
                [-b, b, -b, wb],
                [b, -b, -b, wb],
                [-b, -b, -b, wb],
            ]
        }
        27 => vec![
            [-G3, -G3, -G3, W_CORNER],
            [0.0, -G3, -G3, W_EDGE],
            [G3, -G3, -G3, W_CORNER],
            [-G3, 0.0, -G3, W_EDGE],
            [0.0, 0.0, -G3, W_FACE],
            [G3, 0.0, -G3, W_EDGE],
            [-G3, G3, -G3, W_CORNER],
            [0.0, G3, -G3, W_EDGE],
            [G3, G3, -G3, W_CORNER],
            [-G3, -G3, 0.0, W_EDGE],
            [0.0, -G3, 0.0, W_FACE],
            [G3, -G3, 0.0, W_EDGE],
            [-G3, 0.0, 0.0, W_FACE],
            [0.0, 0.0, 0.0, W_CENTER],
            [G3, 0.0, 0.0, W_FACE],
            [-G3, G3, 0.0, W_EDGE],
            [0.0, G3, 0.0, W_FACE],
            [G3, G3, 0.0, W_EDGE],
            [-G3, -G3, G3, W_CORNER],
            [0.0, -G3, G3, W_EDGE],
            [G3, -G3, G3, W_CORNER],
            [-G3, 0.0, G3, W_EDGE],
            [0.0, 0.0, G3, W_FACE],
            [G3, 0.0, G3, W_EDGE],
            [-G3, G3, G3, W_CORNER],
            [0.0, G3, G3, W_EDGE],
            [G3, G3, G3, W_CORNER],
        ],
        _ => return None,
    };
    Some(rows)
}

pub(super) fn tri(npts: usize) -> Option<Vec<Row>> {
    let rows = match npts {
        1 => vec![[1.0 / 3.0, 1.0 / 3.0, 0.0, 1.0 / 2.0]],
        3 => vec![
            [1.0 / 6.0, 1.0 / 6.0, 0.0, 1.0 / 6.0],
            [2.0 / 3.0, 1.0 / 6.0, 0.0, 1.0 / 6.0],
            [1.0 / 6.0, 2.0 / 3.0, 0.0, 1.0 / 6.0],
        ],
        12 => vec![
            [0.873821971016996, 0.063089014491502, 0.0, 0.0254224531851035],
            [0.063089014491502, 0.873821971016996, 0.0, 0.0254224531851035],
            [0.063089014491502, 0.063089014491502, 0.0, 0.0254224531851035],
            [0.501426509658179, 0.249286745170910, 0.0, 0.0583931378631895],
            [0.249286745170910, 0.501426509658179, 0.0, 0.0583931378631895],
            [0.249286745170910, 0.249286745170910, 0.0, 0.0583931378631895],
            [0.053145049844817, 0.310352451033784, 0.0, 0.041425537809187],
            [0.310352451033784, 0.053145049844817, 0.0, 0.041425537809187],
            [0.053145049844817, 0.636502499121398, 0.0, 0.041425537809187],
            [0.310352451033784, 0.636502499121398, 0.0, 0.041425537809187],
            [0.636502499121398, 0.053145049844817, 0.0, 0.041425537809187],
            [0.636502499121398, 0.310352451033784, 0.0, 0.041425537809187],
        ],
        16 => vec![
            [3.33333333333333E-01, 3.33333333333333E-01, 0.0, 7.21578038388935E-02],
            [8.14148234145540E-02, 4.59292588292723E-01, 0.0, 4.75458171336425E-02],
            [4.59292588292723E-01, 8.14148234145540E-02, 0.0, 4.75458171336425E-02],
            [4.59292588292723E-01, 4.59292588292723E-01, 0.0, 4.75458171336425E-02],
            [6.58861384496480E-01, 1.70569307751760E-01, 0.0, 5.16086852673590E-02],
            [1.70569307751760E-01, 6.58861384496480E-01, 0.0, 5.16086852673590E-02],
            [1.70569307751760E-01, 1.70569307751760E-01, 0.0, 5.16086852673590E-02],
            [8.98905543365938E-01, 5.05472283170310E-02, 0.0, 1.62292488115990E-02],
            [5.05472283170310E-02, 8.98905543365938E-01, 0.0, 1.62292488115990E-02],
            [5.05472283170310E-02, 5.05472283170310E-02, 0.0, 1.62292488115990E-02],
            [8.39477740995800E-03, 2.63112829634638E-01, 0.0, 1.36151570872175E-02],
            [7.28492392955404E-01, 8.39477740995800E-03, 0.0, 1.36151570872175E-02],
            [2.63112829634638E-01, 7.28492392955404E-01, 0.0, 1.36151570872175E-02],
            [8.39477740995800E-03, 7.28492392955404E-01, 0.0, 1.36151570872175E-02],
            [7.28492392955404E-01, 2.63112829634638E-01, 0.0, 1.36151570872175E-02],
            [2.63112829634638E-01, 8.39477740995800E-03, 0.0, 1.36151570872175E-02],
        ],
        _ => return None,
    };
    Some(rows)
}

pub(super) fn tet(npts: usize) -> Option<Vec<Row>> {
    let rows = match npts {
        1 => vec![[1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 6.0]],
        4 => {
            let sq5 = 5.0_f64.sqrt();
            let a = (5.0 + 3.0 * sq5) / 20.0;
            let b = (5.0 - sq5) / 20.0;
            let w = 1.0 / 24.0;
            vec![[a, b, b, w], [b, a, b, w], [b, b, a, w], [b, b, b, w]]
        }
        5 => vec![
            [1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, -2.0 / 15.0],
            [1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 3.0 / 40.0],
            [1.0 / 6.0, 1.0 / 6.0, 1.0 / 2.0, 3.0 / 40.0],
            [1.0 / 6.0, 1.0 / 2.0, 1.0 / 6.0, 3.0 / 40.0],
            [1.0 / 2.0, 1.0 / 6.0, 1.0 / 6.0, 3.0 / 40.0],
        ],
        // six axis points on [-1,1]³ (kept under "tet" as published)
        6 => vec![
            [1.0, 0.0, 0.0, 4.0 / 3.0],
            [-1.0, 0.0, 0.0, 4.0 / 3.0],
            [0.0, 1.0, 0.0, 4.0 / 3.0],
            [0.0, -1.0, 0.0, 4.0 / 3.0],
            [0.0, 0.0, 1.0, 4.0 / 3.0],
            [0.0, 0.0, -1.0, 4.0 / 3.0],
        ],
        _ => return None,
    };
    Some(rows)
}
