/// Declares an operations enum together with `OP_VARIANTS`, the list of
/// symbol names the operations are exported under.
macro_rules! op_variants {
    ($name: ident<$t: ident>, $($variant_name: ident $(($($arg: ty), *))? => $symbol: literal), *) => {
        lazy_static! {
            pub static ref OP_VARIANTS: Vec<&'static str> = {
                let mut v = Vec::new();
                $(
                    v.push($symbol);
                )*v
            };
        }
        as_item! {
            #[derive(Debug, Clone, PartialEq)]
            pub enum $name<$t> {
                $($variant_name $(($($arg), *))?,)*
            }
        }
    }
}

macro_rules! as_item {
    ($i: item) => {
        $i
    }
}
