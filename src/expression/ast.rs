/// One of the four operators an equation may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// All operators, in the order the search assigns them
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];
}

/// Arithmetic expression built over the tokens of one side of a split
#[derive(Debug, Clone)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Combine two subtrees with the given operator
    pub fn binary(op: Op, left: Expression, right: Expression) -> Self {
        match op {
            Op::Add => Expression::Add(Box::new(left), Box::new(right)),
            Op::Sub => Expression::Sub(Box::new(left), Box::new(right)),
            Op::Mul => Expression::Mul(Box::new(left), Box::new(right)),
            Op::Div => Expression::Div(Box::new(left), Box::new(right)),
        }
    }
}
