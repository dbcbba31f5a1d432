//! Walks through the correspondence between in-place row operations and
//! left-multiplication by elementary matrices, printing each step.

use densemat::Matrix;

fn main() {
    let a = Matrix::from_shape_vec(
        (3, 3),
        vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0],
    )
    .unwrap();

    println!("Matrix A:\n{}", a);

    let swap = Matrix::row_swap_matrix(3, 0, 2).unwrap();
    println!("Row-swap matrix E (rows 0 and 2):\n{}", swap);
    println!("E * A:\n{}", swap.mat_mul(&a).unwrap());

    let mut in_place = a.clone();
    in_place.swap_rows(0, 2).unwrap();
    println!("A with rows 0 and 2 swapped in place:\n{}", in_place);

    let scale = Matrix::row_scale_matrix(3, 1, 2.0).unwrap();
    println!("Row-scale matrix E (row 1 by 2):\n{}", scale);
    println!("E * A:\n{}", scale.mat_mul(&a).unwrap());

    let add = Matrix::row_add_matrix(3, 0, 2, 0.5).unwrap();
    println!("Row-add matrix E (0.5 * row 0 into row 2):\n{}", add);
    println!("E * A:\n{}", add.mat_mul(&a).unwrap());
}
