//! The recursive filling engine: kind dispatch and matcher refinement.

use crate::matcher::{Matcher, Site};
use crate::reflect::{Node, Reflect, Target};
use crate::{Error, Generator};
use tracing::trace;

impl Generator {
    /// Fills every leaf reachable from `target` with pseudo-random values.
    ///
    /// Returns [`Error::UnfillableTarget`] when the target's own view is
    /// opaque (raw pointers and the like); nested opaque leaves are skipped
    /// silently instead.
    pub fn fill<T: Reflect>(&mut self, target: &mut T) -> Result<(), Error> {
        self.fill_value(target.target())
    }

    /// Fills through an explicit reflective value, for callers that build
    /// [`Target`]s themselves.
    pub fn fill_value(&mut self, target: Target<'_>) -> Result<(), Error> {
        if matches!(target.node, Node::Opaque) {
            return Err(Error::UnfillableTarget);
        }
        trace!(ty = target.shape.name(), "filling target");
        self.fill_target(target, None, Site::Plain);
        Ok(())
    }

    fn fill_target(&mut self, target: Target<'_>, parent: Option<&Matcher<'_>>, site: Site) {
        let Target { shape, node } = target;
        let matcher = Matcher::new(parent, site, shape);

        match node {
            Node::Bool(v) => *v = self.gen_bool(&matcher),
            Node::I8(v) => *v = self.gen_i8(&matcher),
            Node::I16(v) => *v = self.gen_i16(&matcher),
            Node::I32(v) => *v = self.gen_i32(&matcher),
            Node::I64(v) => *v = self.gen_i64(&matcher),
            Node::Isize(v) => *v = self.gen_isize(&matcher),
            Node::U8(v) => *v = self.gen_u8(&matcher),
            Node::U16(v) => *v = self.gen_u16(&matcher),
            Node::U32(v) => *v = self.gen_u32(&matcher),
            Node::U64(v) => *v = self.gen_u64(&matcher),
            Node::Usize(v) => *v = self.gen_usize(&matcher),
            Node::F32(v) => *v = self.gen_f32(&matcher),
            Node::F64(v) => *v = self.gen_f64(&matcher),
            Node::Char(v) => *v = self.gen_char(&matcher),
            Node::Str(v) => *v = self.gen_string(&matcher),

            Node::Complex32 { re, im } => {
                let rm = Matcher::new(Some(&matcher), Site::RealPart, <f32 as Reflect>::shape());
                *re = self.gen_f32(&rm);
                let im_m = Matcher::new(Some(&matcher), Site::ImagPart, <f32 as Reflect>::shape());
                *im = self.gen_f32(&im_m);
            }
            Node::Complex64 { re, im } => {
                let rm = Matcher::new(Some(&matcher), Site::RealPart, <f64 as Reflect>::shape());
                *re = self.gen_f64(&rm);
                let im_m = Matcher::new(Some(&matcher), Site::ImagPart, <f64 as Reflect>::shape());
                *im = self.gen_f64(&im_m);
            }

            Node::Option(mut access) => {
                if self.gen_use_nil(&matcher) {
                    access.clear();
                    return;
                }
                let inner = access.activate();
                if matches!(inner.node, Node::Opaque) {
                    drop(inner);
                    access.clear();
                    return;
                }
                self.fill_target(inner, Some(&matcher), Site::Plain);
            }

            Node::Seq(mut access) => {
                let len = {
                    let lm =
                        Matcher::new(Some(&matcher), Site::SliceLen, <usize as Reflect>::shape());
                    self.gen_slice_len(&lm)
                };
                access.resize(len);
                for index in 0..len {
                    let elem = access.target_at(index);
                    self.fill_target(elem, Some(&matcher), Site::SliceElem { index, len });
                }
            }

            Node::Array(mut access) => {
                let len = access.len();
                for index in 0..len {
                    let elem = access.target_at(index);
                    self.fill_target(elem, Some(&matcher), Site::ArrayElem { index, len });
                }
            }

            Node::Map(mut access) => {
                let len = {
                    let lm =
                        Matcher::new(Some(&matcher), Site::MapLen, <usize as Reflect>::shape());
                    self.gen_map_len(&lm)
                };
                access.clear();
                for _ in 0..len {
                    {
                        let key = access.key_target();
                        self.fill_target(key, Some(&matcher), Site::MapKey);
                    }
                    let echo = access.key_echo();
                    {
                        let value = access.value_target();
                        self.fill_target(value, Some(&matcher), Site::MapValue { key: echo });
                    }
                    access.commit();
                }
            }

            Node::Struct(fields) => {
                let owner = shape.stripped_id();
                for field in fields {
                    self.fill_target(
                        field.target,
                        Some(&matcher),
                        Site::Field {
                            owner,
                            name: field.name,
                        },
                    );
                }
            }

            Node::Dynamic(v) => *v = self.synth_dynamic(&matcher, 0),

            Node::Opaque => {
                trace!(ty = shape.name(), "skipping opaque leaf");
            }
        }
    }
}

/// Fills a target with default settings, the one-call convenience entry.
pub fn fill<T: Reflect>(target: &mut T) -> Result<(), Error> {
    Generator::new().fill(target)
}
