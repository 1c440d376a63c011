use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Draw data for one entity: its committed box and current sheet frame.
pub fn render_instance(entity: &Entity) -> RenderInstance {
    let extent = entity.extent();
    let (col, row) = entity.sheet.current_frame();
    RenderInstance {
        dst_x: entity.pos.x,
        dst_y: entity.pos.y,
        dst_w: extent.x,
        dst_h: extent.y,
        src_x: col as f32 * entity.size.x,
        src_y: row as f32 * entity.size.y,
        src_w: entity.size.x,
        src_h: entity.size.y,
        atlas: entity.atlas.0 as f32,
        alpha: if entity.flags.disabled { 0.5 } else { 1.0 },
    }
}

/// Rebuild the render buffer from a set of entities, in the order given.
/// Hidden entities are skipped; disabled ones are still drawn.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities.filter(|e| e.visible) {
        if !buffer.push(render_instance(entity)) {
            log::warn!("render buffer full ({} instances), dropping the rest", buffer.capacity());
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AtlasId, EntityId};
    use crate::components::animation::SpriteSheet;
    use glam::Vec2;

    #[test]
    fn instance_uses_scaled_box_and_sheet_frame() {
        let mut sheet = SpriteSheet::new(4, 2, 1);
        sheet.column = 3;
        sheet.row = 1;
        let e = Entity::new(EntityId(1))
            .with_pos(Vec2::new(10.0, 20.0))
            .with_size(Vec2::new(32.0, 16.0))
            .with_scale(2.0)
            .with_atlas(AtlasId(3))
            .with_sheet(sheet);

        let inst = render_instance(&e);
        assert_eq!((inst.dst_x, inst.dst_y), (10.0, 20.0));
        assert_eq!((inst.dst_w, inst.dst_h), (64.0, 32.0));
        assert_eq!((inst.src_x, inst.src_y), (96.0, 16.0));
        assert_eq!((inst.src_w, inst.src_h), (32.0, 16.0));
        assert_eq!(inst.atlas, 3.0);
        assert_eq!(inst.alpha, 1.0);
    }

    #[test]
    fn hidden_entities_are_skipped_disabled_are_drawn() {
        let mut hidden = Entity::new(EntityId(1));
        hidden.visible = false;
        let mut disabled = Entity::new(EntityId(2));
        disabled.flags.disabled = true;
        let entities = vec![hidden, disabled, Entity::new(EntityId(3))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.instances[0].alpha, 0.5);
    }

    #[test]
    fn full_buffer_truncates() {
        let entities: Vec<Entity> = (0..5).map(|i| Entity::new(EntityId(i))).collect();
        let mut buffer = RenderBuffer::with_capacity(3);
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 3);
    }
}
