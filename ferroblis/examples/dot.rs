use ferroblis::{syrk, Matrix, SyrkOptions};

fn main() {
    //     0 1
    // A = 2 3
    //     4 5

    // B = 0 1
    //     2 3

    // column major (read each column first)
    let a = [0., 2., 4., 1., 3., 5.];
    let b = [0., 2., 1., 3.];

    let a = Matrix::from_shape([3, 2], a); // 3 rows x 2 cols
    let b = Matrix::from_shape([2, 2], b); // 2 rows x 2 cols

    //           2  3
    // C = AB =  6 11
    //          10 19

    let c = a.dot(&b).unwrap();
    assert_eq!(c.into_inner(), [2., 6., 10., 3., 11., 19.]);

    //                  1  3  5
    // S = A A^T =      3 13 23
    //                  5 23 41
    let s = a.dot(&a.t()).unwrap();
    assert_eq!(s.into_inner(), [1., 3., 5., 3., 13., 23., 5., 23., 41.]);

    // just the upper triangle, the rest stays zero
    let u = syrk(&a, &SyrkOptions::default().with_upper(true)).unwrap();
    assert_eq!(u.into_inner(), [1., 0., 0., 3., 13., 0., 5., 23., 41.]);
}
