use syn::{BinOp, Expr, ExprLit, Lit};

/// Evaluate a constant `usize` expression such as `12`, `(4 * 3)` or `N + 1`
/// with a literal `N`. Returns `None` for anything else, including overflow.
pub fn evaluate_usize(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse().ok(),
        Expr::Paren(paren) => evaluate_usize(&paren.expr),
        // Expressions passed through `macro_rules!` arrive wrapped in a
        // `None`-delimited group.
        Expr::Group(group) => evaluate_usize(&group.expr),
        Expr::Block(block) => match block.block.stmts.as_slice() {
            [syn::Stmt::Expr(expr, None)] => evaluate_usize(expr),
            _ => None,
        },
        Expr::Binary(binary) => {
            let left = evaluate_usize(&binary.left)?;
            let right = evaluate_usize(&binary.right)?;
            match binary.op {
                BinOp::Add(_) => left.checked_add(right),
                BinOp::Sub(_) => left.checked_sub(right),
                BinOp::Mul(_) => left.checked_mul(right),
                BinOp::Div(_) => left.checked_div(right),
                _ => None,
            }
        }
        _ => None,
    }
}
