use std::cmp::Ordering;

/// Select the rows of `rows` that lie on the (x, y) frontier.
///
/// Rows are visited in order of descending x, then descending y, while the
/// highest accepted y is tracked. A row is kept when its y is at least that
/// maximum, so a row that ties an already accepted row on y (including an
/// exact duplicate) is kept as well. The result is in visiting order.
///
/// Sorting is stable and places NaN values last; a NaN y is never accepted.
pub fn pareto_frontier<T, X, Y>(rows: &[T], x: X, y: Y) -> Vec<T>
where
    T: Clone,
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    let mut order: Vec<&T> = rows.iter().collect();
    order.sort_by(|a, b| descending(x(a), x(b)).then_with(|| descending(y(a), y(b))));

    let mut max_y = f64::NEG_INFINITY;
    let mut frontier = Vec::new();
    for row in order {
        let value = y(row);
        if value >= max_y {
            max_y = value;
            frontier.push(row.clone());
        }
    }
    frontier
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
