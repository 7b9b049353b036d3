//! The flat, prefixed entry points.
//!
//! Every argument is a primitive passed by value: flags as `bool`, dimensions and
//! strides as [`dim_t`]/[`inc_t`], real scalars as floats and complex scalars as a
//! `(real, imag)` pair. The `fbli_` prefix keeps these from colliding with any other
//! BLAS or BLIS linked into the same process.
//!
//! None of these validate anything. A call with any negative dimension returns
//! without touching memory, as an empty call would.

use num_complex::{Complex, Complex32, Complex64};

use crate::{
    blas::{MatrixOp, Uplo, BLAS3},
    dim_t, inc_t,
    rntm::Rntm,
};

/// `None` for a negative dimension
fn dim(d: dim_t) -> Option<usize> {
    usize::try_from(d).ok()
}

macro_rules! real_entry_points {
    ($float:ty => gemm: $gemm:ident, syrk: $syrk:ident, mksymm: $mksymm:ident) => {
        /// `C := alpha * op(A) * op(B) + beta * C`
        ///
        /// # Safety
        /// See [`BLAS3::gemm`].
        #[no_mangle]
        #[allow(clippy::too_many_arguments)]
        pub unsafe extern "C" fn $gemm(
            a_trans: bool,
            a_conj: bool,
            b_trans: bool,
            b_conj: bool,
            m: dim_t,
            n: dim_t,
            k: dim_t,
            alpha: $float,
            a: *const $float,
            rsa: inc_t,
            csa: inc_t,
            b: *const $float,
            rsb: inc_t,
            csb: inc_t,
            beta: $float,
            c: *mut $float,
            rsc: inc_t,
            csc: inc_t,
            nthreads: dim_t,
        ) {
            let (Some(m), Some(n), Some(k)) = (dim(m), dim(n), dim(k)) else {
                return;
            };
            <$float>::gemm(
                Rntm::new(nthreads),
                MatrixOp::from_flags(a_trans, a_conj),
                MatrixOp::from_flags(b_trans, b_conj),
                m,
                n,
                k,
                alpha,
                a,
                rsa,
                csa,
                b,
                rsb,
                csb,
                beta,
                c,
                rsc,
                csc,
            )
        }

        /// `C := alpha * op(A) * op(A)ᵀ + beta * C` on one triangle of `C`
        ///
        /// # Safety
        /// See [`BLAS3::syrk`].
        #[no_mangle]
        #[allow(clippy::too_many_arguments)]
        pub unsafe extern "C" fn $syrk(
            a_trans: bool,
            a_conj: bool,
            c_upper: bool,
            m: dim_t,
            k: dim_t,
            alpha: $float,
            a: *const $float,
            rsa: inc_t,
            csa: inc_t,
            beta: $float,
            c: *mut $float,
            rsc: inc_t,
            csc: inc_t,
            nthreads: dim_t,
        ) {
            let (Some(m), Some(k)) = (dim(m), dim(k)) else {
                return;
            };
            <$float>::syrk(
                Rntm::new(nthreads),
                Uplo::from_upper(c_upper),
                MatrixOp::from_flags(a_trans, a_conj),
                m,
                k,
                alpha,
                a,
                rsa,
                csa,
                beta,
                c,
                rsc,
                csc,
            )
        }

        /// Mirrors one triangle of `A` onto the other.
        ///
        /// # Safety
        /// See [`BLAS3::mksymm`].
        #[no_mangle]
        pub unsafe extern "C" fn $mksymm(
            upper: bool,
            m: dim_t,
            a: *mut $float,
            rsa: inc_t,
            csa: inc_t,
            nthreads: dim_t,
        ) {
            let Some(m) = dim(m) else {
                return;
            };
            <$float>::mksymm(
                Rntm::new(nthreads),
                Uplo::from_upper(upper),
                m,
                a,
                rsa,
                csa,
            )
        }
    };
}

macro_rules! complex_entry_points {
    ($complex:ty, $real:ty => gemm: $gemm:ident, syrk: $syrk:ident, mksymm: $mksymm:ident) => {
        /// `C := alpha * op(A) * op(B) + beta * C`, with `alpha` and `beta` split into parts.
        ///
        /// # Safety
        /// See [`BLAS3::gemm`].
        #[no_mangle]
        #[allow(clippy::too_many_arguments)]
        pub unsafe extern "C" fn $gemm(
            a_trans: bool,
            a_conj: bool,
            b_trans: bool,
            b_conj: bool,
            m: dim_t,
            n: dim_t,
            k: dim_t,
            alpha_real: $real,
            alpha_imag: $real,
            a: *const $complex,
            rsa: inc_t,
            csa: inc_t,
            b: *const $complex,
            rsb: inc_t,
            csb: inc_t,
            beta_real: $real,
            beta_imag: $real,
            c: *mut $complex,
            rsc: inc_t,
            csc: inc_t,
            nthreads: dim_t,
        ) {
            let (Some(m), Some(n), Some(k)) = (dim(m), dim(n), dim(k)) else {
                return;
            };
            <$complex>::gemm(
                Rntm::new(nthreads),
                MatrixOp::from_flags(a_trans, a_conj),
                MatrixOp::from_flags(b_trans, b_conj),
                m,
                n,
                k,
                Complex::new(alpha_real, alpha_imag),
                a,
                rsa,
                csa,
                b,
                rsb,
                csb,
                Complex::new(beta_real, beta_imag),
                c,
                rsc,
                csc,
            )
        }

        /// `C := alpha * op(A) * op(A)ᴴ + beta * C` on one triangle of `C`,
        /// with `alpha` and `beta` split into parts.
        ///
        /// # Safety
        /// See [`BLAS3::syrk`].
        #[no_mangle]
        #[allow(clippy::too_many_arguments)]
        pub unsafe extern "C" fn $syrk(
            a_trans: bool,
            a_conj: bool,
            c_upper: bool,
            m: dim_t,
            k: dim_t,
            alpha_real: $real,
            alpha_imag: $real,
            a: *const $complex,
            rsa: inc_t,
            csa: inc_t,
            beta_real: $real,
            beta_imag: $real,
            c: *mut $complex,
            rsc: inc_t,
            csc: inc_t,
            nthreads: dim_t,
        ) {
            let (Some(m), Some(k)) = (dim(m), dim(k)) else {
                return;
            };
            <$complex>::syrk(
                Rntm::new(nthreads),
                Uplo::from_upper(c_upper),
                MatrixOp::from_flags(a_trans, a_conj),
                m,
                k,
                Complex::new(alpha_real, alpha_imag),
                a,
                rsa,
                csa,
                Complex::new(beta_real, beta_imag),
                c,
                rsc,
                csc,
            )
        }

        /// Mirrors one triangle of `A` onto the other, conjugated.
        ///
        /// # Safety
        /// See [`BLAS3::mksymm`].
        #[no_mangle]
        pub unsafe extern "C" fn $mksymm(
            upper: bool,
            m: dim_t,
            a: *mut $complex,
            rsa: inc_t,
            csa: inc_t,
            nthreads: dim_t,
        ) {
            let Some(m) = dim(m) else {
                return;
            };
            <$complex>::mksymm(
                Rntm::new(nthreads),
                Uplo::from_upper(upper),
                m,
                a,
                rsa,
                csa,
            )
        }
    };
}

real_entry_points!(f32 => gemm: fbli_sgemm, syrk: fbli_ssyrk, mksymm: fbli_smksymm);
real_entry_points!(f64 => gemm: fbli_dgemm, syrk: fbli_dsyrk, mksymm: fbli_dmksymm);
complex_entry_points!(Complex32, f32 => gemm: fbli_cgemm, syrk: fbli_csyrk, mksymm: fbli_cmksymm);
complex_entry_points!(Complex64, f64 => gemm: fbli_zgemm, syrk: fbli_zsyrk, mksymm: fbli_zmksymm);

#[cfg(test)]
mod tests {
    use num_complex::{Complex32, Complex64};

    use super::*;

    const X: f64 = -99.0;

    #[test]
    fn dgemm_identity() {
        // column major
        let i = [1., 0., 0., 1.];
        let m = [3., -1., 2.5, 7.];
        let mut c = [X; 4];

        unsafe {
            fbli_dgemm(
                false,
                false,
                false,
                false,
                2,
                2,
                2,
                1.,
                i.as_ptr(),
                1,
                2,
                m.as_ptr(),
                1,
                2,
                0.,
                c.as_mut_ptr(),
                1,
                2,
                -1,
            );
        }

        assert_eq!(c, m);
    }

    #[test]
    fn sgemm_transposes() {
        // A = 1 3    B = 5 7
        //     2 4        6 8
        let a = [1_f32, 2., 3., 4.];
        let b = [5_f32, 6., 7., 8.];
        let mut c = [0_f32; 4];

        unsafe {
            fbli_sgemm(
                true,
                false,
                true,
                false,
                2,
                2,
                2,
                1.,
                a.as_ptr(),
                1,
                2,
                b.as_ptr(),
                1,
                2,
                0.,
                c.as_mut_ptr(),
                1,
                2,
                2,
            );
        }

        // A^B^ = 19 22
        //        43 50
        assert_eq!(c, [19., 43., 22., 50.]);
    }

    #[test]
    fn zgemm_pair_matches_native() {
        let a = [
            Complex64::new(0.1, 0.7),
            Complex64::new(-1.3, 0.2),
            Complex64::new(2.9, -0.4),
            Complex64::new(0.3, 0.3),
        ];
        let b = [
            Complex64::new(1.1, -0.5),
            Complex64::new(0.6, 1.9),
            Complex64::new(-0.2, 0.8),
            Complex64::new(1.7, 0.0),
        ];
        let c0 = [
            Complex64::new(0.25, -1.0),
            Complex64::new(3.0, 0.5),
            Complex64::new(-2.0, 1.5),
            Complex64::new(0.0, 0.75),
        ];
        let (r, i) = (1.0 / 3.0, -std::f64::consts::PI);
        let (br, bi) = (0.1, 2.0_f64.sqrt());

        let mut via_pairs = c0;
        let mut native = c0;
        unsafe {
            fbli_zgemm(
                false,
                true,
                true,
                false,
                2,
                2,
                2,
                r,
                i,
                a.as_ptr(),
                1,
                2,
                b.as_ptr(),
                1,
                2,
                br,
                bi,
                via_pairs.as_mut_ptr(),
                1,
                2,
                1,
            );
            Complex64::gemm(
                Rntm::new(1),
                MatrixOp::ConjNoTrans,
                MatrixOp::Trans,
                2,
                2,
                2,
                Complex64::new(r, i),
                a.as_ptr(),
                1,
                2,
                b.as_ptr(),
                1,
                2,
                Complex64::new(br, bi),
                native.as_mut_ptr(),
                1,
                2,
            );
        }

        for (x, y) in via_pairs.iter().zip(&native) {
            assert_eq!(x.re.to_bits(), y.re.to_bits());
            assert_eq!(x.im.to_bits(), y.im.to_bits());
        }
    }

    #[test]
    fn cgemm_scalar_parts() {
        // 1x1: (alpha_real + alpha_imag i) * 1 * 1 + (beta_real + beta_imag i) * i
        let one = [Complex32::new(1., 0.)];
        let mut c = [Complex32::new(0., 1.)];

        unsafe {
            fbli_cgemm(
                false,
                false,
                false,
                false,
                1,
                1,
                1,
                2.,
                3.,
                one.as_ptr(),
                1,
                1,
                one.as_ptr(),
                1,
                1,
                0.,
                2.,
                c.as_mut_ptr(),
                1,
                1,
                0,
            );
        }

        // 2+3i + 2i * i = 0+3i
        assert_eq!(c[0], Complex32::new(0., 3.));
    }

    #[test]
    fn dsyrk_upper() {
        // A = 1
        //     2
        let a = [1., 2.];
        let mut c = [X; 4];

        unsafe {
            fbli_dsyrk(
                false,
                false,
                true,
                2,
                1,
                1.,
                a.as_ptr(),
                1,
                2,
                0.,
                c.as_mut_ptr(),
                1,
                2,
                0,
            );
        }

        // C = 1 2
        //     X 4
        assert_eq!(c, [1., X, 2., 4.]);
    }

    #[test]
    fn zsyrk_hermitian() {
        // A = i   =>   A Aᴴ = 1
        let a = [Complex64::new(0., 1.)];
        let mut c = [Complex64::new(5., 5.)];

        unsafe {
            fbli_zsyrk(
                false,
                false,
                false,
                1,
                1,
                1.,
                0.,
                a.as_ptr(),
                1,
                1,
                0.,
                0.,
                c.as_mut_ptr(),
                1,
                1,
                0,
            );
        }

        assert_eq!(c[0], Complex64::new(1., 0.));
    }

    #[test]
    fn dmksymm_upper() {
        // A = 5 7
        //     X 9
        let mut a = [5., X, 7., 9.];
        unsafe {
            fbli_dmksymm(true, 2, a.as_mut_ptr(), 1, 2, -1);
        }
        assert_eq!(a, [5., 7., 7., 9.]);
    }

    #[test]
    fn smksymm_lower() {
        let mut a = [1_f32, 2., -1., 3.];
        unsafe {
            fbli_smksymm(false, 2, a.as_mut_ptr(), 1, 2, 4);
        }
        assert_eq!(a, [1., 2., 2., 3.]);
    }

    #[test]
    fn negative_dims_are_empty() {
        let mut c = [X];
        unsafe {
            fbli_dgemm(
                false,
                false,
                false,
                false,
                -1,
                1,
                1,
                1.,
                std::ptr::null(),
                1,
                1,
                std::ptr::null(),
                1,
                1,
                0.,
                c.as_mut_ptr(),
                1,
                1,
                0,
            );
            fbli_dmksymm(false, -3, c.as_mut_ptr(), 1, 1, 0);
        }
        assert_eq!(c, [X]);
    }

    #[test]
    fn negative_k_leaves_c() {
        // k = 0 would scale C by beta, a negative k must not
        let mut c = [1., 2., 3., 4.];
        let mut z = [Complex64::new(1., 1.)];
        unsafe {
            fbli_dgemm(
                false,
                false,
                false,
                false,
                2,
                2,
                -1,
                1.,
                std::ptr::null(),
                1,
                2,
                std::ptr::null(),
                1,
                2,
                2.,
                c.as_mut_ptr(),
                1,
                2,
                0,
            );
            fbli_dsyrk(
                false,
                false,
                true,
                2,
                -2,
                1.,
                std::ptr::null(),
                1,
                2,
                2.,
                c.as_mut_ptr(),
                1,
                2,
                0,
            );
            fbli_zsyrk(
                false,
                false,
                false,
                1,
                -1,
                1.,
                0.,
                std::ptr::null(),
                1,
                1,
                0.,
                0.,
                z.as_mut_ptr(),
                1,
                1,
                0,
            );
        }
        assert_eq!(c, [1., 2., 3., 4.]);
        assert_eq!(z, [Complex64::new(1., 1.)]);
    }
}
