//! Shared fixtures for dataflow analysis tests.

pub(crate) mod test_utils {
    //! Canonical method bodies used across the analysis tests.
    //!
    //! Each constructor returns the finished [`Cfg`] plus the variable
    //! handles and statement indices a test needs to phrase assertions.

    use crate::cfg::{Cfg, CfgBuilder, EdgeKind};
    use crate::ir::{BinaryOp, Exp, IrBuilder, LValue, StmtKind, Type, Var};

    fn assign(lvalue: Var, rvalue: Exp) -> StmtKind {
        StmtKind::Assign {
            lvalue: LValue::Var(lvalue),
            rvalue,
        }
    }

    fn binary(op: BinaryOp, lhs: Var, rhs: Var) -> Exp {
        Exp::Binary { op, lhs, rhs }
    }

    pub(crate) struct LinearVars {
        pub p: Var,
        pub a: Var,
        pub t: Var,
        pub b: Var,
        pub sum_stmt: usize,
    }

    /// `int f(int p) { a = 1; t = 2; b = a + t; return b; }`
    pub(crate) fn linear_consts() -> (Cfg, LinearVars) {
        let mut ir = IrBuilder::new("f");
        let p = ir.param("p", Type::Int);
        let a = ir.var("a", Type::Int);
        let t = ir.var("t", Type::Int);
        let b = ir.var("b", Type::Int);
        let s0 = ir.stmt(assign(a, Exp::IntLiteral(1)));
        let s1 = ir.stmt(assign(t, Exp::IntLiteral(2)));
        let s2 = ir.stmt(assign(b, binary(BinaryOp::Add, a, t)));
        let s3 = ir.stmt(StmtKind::Return { value: Some(b) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::FallThrough)
            .edge(n2, n3, EdgeKind::FallThrough)
            .edge(n3, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            LinearVars {
                p,
                a,
                t,
                b,
                sum_stmt: s2,
            },
        )
    }

    pub(crate) struct BranchVars {
        pub a: Var,
        pub x: Var,
        pub if_stmt: usize,
        pub then_stmt: usize,
        pub else_stmt: usize,
        pub merge_stmt: usize,
    }

    /// `int f(int a) { if (a == a) x = 1; else x = 2; return x; }`
    pub(crate) fn branch_on_param() -> (Cfg, BranchVars) {
        let mut ir = IrBuilder::new("f");
        let a = ir.param("a", Type::Int);
        let x = ir.var("x", Type::Int);
        let s0 = ir.stmt(StmtKind::If {
            cond: binary(BinaryOp::Eq, a, a),
        });
        let s1 = ir.stmt(assign(x, Exp::IntLiteral(1)));
        let s2 = ir.stmt(assign(x, Exp::IntLiteral(2)));
        let s3 = ir.stmt(StmtKind::Return { value: Some(x) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::IfTrue)
            .edge(n0, n2, EdgeKind::IfFalse)
            .edge(n1, n3, EdgeKind::Goto)
            .edge(n2, n3, EdgeKind::FallThrough)
            .edge(n3, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            BranchVars {
                a,
                x,
                if_stmt: s0,
                then_stmt: s1,
                else_stmt: s2,
                merge_stmt: s3,
            },
        )
    }

    pub(crate) struct DeadStoreVars {
        pub x: Var,
        pub first_store: usize,
        pub second_store: usize,
    }

    /// `int f() { x = 1; x = 2; y = x; return y; }`
    pub(crate) fn dead_store() -> (Cfg, DeadStoreVars) {
        let mut ir = IrBuilder::new("f");
        let x = ir.var("x", Type::Int);
        let y = ir.var("y", Type::Int);
        let s0 = ir.stmt(assign(x, Exp::IntLiteral(1)));
        let s1 = ir.stmt(assign(x, Exp::IntLiteral(2)));
        let s2 = ir.stmt(assign(y, Exp::Var(x)));
        let s3 = ir.stmt(StmtKind::Return { value: Some(y) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::FallThrough)
            .edge(n2, n3, EdgeKind::FallThrough)
            .edge(n3, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            DeadStoreVars {
                x,
                first_store: s0,
                second_store: s1,
            },
        )
    }

    pub(crate) struct ConstantIfVars {
        pub if_stmt: usize,
        pub then_stmt: usize,
        pub else_stmt: usize,
    }

    /// `int f() { c = 0; if (c) a = 1; else a = 2; return a; }`
    pub(crate) fn constant_if() -> (Cfg, ConstantIfVars) {
        let mut ir = IrBuilder::new("f");
        let c = ir.var("c", Type::Int);
        let a = ir.var("a", Type::Int);
        let s0 = ir.stmt(assign(c, Exp::IntLiteral(0)));
        let s1 = ir.stmt(StmtKind::If { cond: Exp::Var(c) });
        let s2 = ir.stmt(assign(a, Exp::IntLiteral(1)));
        let s3 = ir.stmt(assign(a, Exp::IntLiteral(2)));
        let s4 = ir.stmt(StmtKind::Return { value: Some(a) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3, n4) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
            builder.node(s4),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::IfTrue)
            .edge(n1, n3, EdgeKind::IfFalse)
            .edge(n2, n4, EdgeKind::Goto)
            .edge(n3, n4, EdgeKind::FallThrough)
            .edge(n4, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            ConstantIfVars {
                if_stmt: s1,
                then_stmt: s2,
                else_stmt: s3,
            },
        )
    }

    pub(crate) struct ConstantSwitchVars {
        pub switch_stmt: usize,
        pub case1_stmt: usize,
        pub case3_stmt: usize,
        pub default_stmt: usize,
    }

    /// `int f() { x = 3; switch (x) { case 1: y = 1; case 3: y = 3;
    /// default: y = 9; } return y; }` with each arm jumping to the
    /// return, so there is no fall-through between arms.
    pub(crate) fn constant_switch() -> (Cfg, ConstantSwitchVars) {
        let mut ir = IrBuilder::new("f");
        let x = ir.var("x", Type::Int);
        let y = ir.var("y", Type::Int);
        let s0 = ir.stmt(assign(x, Exp::IntLiteral(3)));
        let s1 = ir.stmt(StmtKind::Switch { var: x });
        let s2 = ir.stmt(assign(y, Exp::IntLiteral(1)));
        let s3 = ir.stmt(assign(y, Exp::IntLiteral(3)));
        let s4 = ir.stmt(assign(y, Exp::IntLiteral(9)));
        let s5 = ir.stmt(StmtKind::Return { value: Some(y) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3, n4, n5) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
            builder.node(s4),
            builder.node(s5),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::SwitchCase(1))
            .edge(n1, n3, EdgeKind::SwitchCase(3))
            .edge(n1, n4, EdgeKind::SwitchDefault)
            .edge(n2, n5, EdgeKind::Goto)
            .edge(n3, n5, EdgeKind::Goto)
            .edge(n4, n5, EdgeKind::FallThrough)
            .edge(n5, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            ConstantSwitchVars {
                switch_stmt: s1,
                case1_stmt: s2,
                case3_stmt: s3,
                default_stmt: s4,
            },
        )
    }

    pub(crate) struct AllocVars {
        pub alloc_stmt: usize,
    }

    /// `void f() { x = new T(); return; }` with `x` never read.
    pub(crate) fn unused_allocation() -> (Cfg, AllocVars) {
        let mut ir = IrBuilder::new("f");
        let x = ir.var("x", Type::Reference);
        let s0 = ir.stmt(assign(x, Exp::New { class: "T".into() }));
        let s1 = ir.stmt(StmtKind::Return { value: None });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1) = (builder.node(s0), builder.node(s1));
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, exit, EdgeKind::Return);

        (builder.build().unwrap(), AllocVars { alloc_stmt: s0 })
    }

    pub(crate) struct LoopVars {
        pub i: Var,
        pub n: Var,
        pub header_stmt: usize,
    }

    /// `int f(int n) { i = 0; one = 1; while (i < n) i = i + one;
    /// return i; }` lowered with an explicit back edge.
    pub(crate) fn loop_counter() -> (Cfg, LoopVars) {
        let mut ir = IrBuilder::new("f");
        let n = ir.param("n", Type::Int);
        let i = ir.var("i", Type::Int);
        let one = ir.var("one", Type::Int);
        let s0 = ir.stmt(assign(i, Exp::IntLiteral(0)));
        let s1 = ir.stmt(assign(one, Exp::IntLiteral(1)));
        let s2 = ir.stmt(StmtKind::If {
            cond: binary(BinaryOp::Lt, i, n),
        });
        let s3 = ir.stmt(assign(i, binary(BinaryOp::Add, i, one)));
        let s4 = ir.stmt(StmtKind::Goto);
        let s5 = ir.stmt(StmtKind::Return { value: Some(i) });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3, n4, n5) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
            builder.node(s4),
            builder.node(s5),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::FallThrough)
            .edge(n2, n3, EdgeKind::IfTrue)
            .edge(n3, n4, EdgeKind::FallThrough)
            .edge(n4, n2, EdgeKind::Goto)
            .edge(n2, n5, EdgeKind::IfFalse)
            .edge(n5, exit, EdgeKind::Return);

        (
            builder.build().unwrap(),
            LoopVars {
                i,
                n,
                header_stmt: s2,
            },
        )
    }

    /// A chain that neither defines nor branches: `nop; goto; nop; return`.
    pub(crate) fn nop_chain() -> Cfg {
        let mut ir = IrBuilder::new("f");
        let _p = ir.param("p", Type::Int);
        let s0 = ir.stmt(StmtKind::Nop);
        let s1 = ir.stmt(StmtKind::Goto);
        let s2 = ir.stmt(StmtKind::Nop);
        let s3 = ir.stmt(StmtKind::Return { value: None });

        let mut builder = CfgBuilder::new(ir.build().unwrap());
        let (entry, exit) = (builder.entry(), builder.exit());
        let (n0, n1, n2, n3) = (
            builder.node(s0),
            builder.node(s1),
            builder.node(s2),
            builder.node(s3),
        );
        builder
            .edge(entry, n0, EdgeKind::FallThrough)
            .edge(n0, n1, EdgeKind::FallThrough)
            .edge(n1, n2, EdgeKind::Goto)
            .edge(n2, n3, EdgeKind::FallThrough)
            .edge(n3, exit, EdgeKind::Return);

        builder.build().unwrap()
    }
}
